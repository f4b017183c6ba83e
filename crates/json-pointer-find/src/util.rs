//! Reference token codec: splitting, escaping, and percent-encoding.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::JsonPointerError;

/// Characters that are percent-encoded when a token is rendered.
///
/// `~` and `/` never reach this set, they are tilde-escaped first.
const COMPONENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use json_pointer_find::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("no-escapes"), "no-escapes");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 before ~0, otherwise "~01" would turn into "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `/` is replaced with `~1` and `~` is replaced with `~0`.
///
/// # Example
///
/// ```
/// use json_pointer_find::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Fully decodes one raw pointer segment: percent-escapes first, then tilde escapes.
///
/// Malformed percent sequences (`%d`, a trailing `%`) are kept literally.
///
/// # Errors
///
/// Fails when the percent-escapes do not decode to valid UTF-8.
///
/// # Example
///
/// ```
/// use json_pointer_find::decode_component;
///
/// assert_eq!(decode_component("c%25d").unwrap(), "c%d");
/// assert_eq!(decode_component("c%d").unwrap(), "c%d");
/// assert_eq!(decode_component("a~1b").unwrap(), "a/b");
/// assert!(decode_component("%FF").is_err());
/// ```
pub fn decode_component(raw: &str) -> Result<String, std::str::Utf8Error> {
    if !raw.contains('%') {
        return Ok(unescape_component(raw));
    }
    let decoded = percent_decode_str(raw).decode_utf8()?;
    Ok(unescape_component(&decoded))
}

/// Encodes a decoded token for rendering: tilde escapes, then percent-escapes.
///
/// # Example
///
/// ```
/// use json_pointer_find::encode_component;
///
/// assert_eq!(encode_component("c%d"), "c%25d");
/// assert_eq!(encode_component("a/b c"), "a~1b%20c");
/// ```
pub fn encode_component(token: &str) -> String {
    utf8_percent_encode(&escape_component(token), COMPONENT_ENCODE_SET).to_string()
}

/// Parse a JSON Pointer string into decoded reference tokens.
///
/// - Empty string returns an empty vec (the root).
/// - The mandatory leading `/` is stripped, the rest is split on `/`.
/// - Each segment is decoded with [`decode_component`].
///
/// # Errors
///
/// - `MalformedPointer` if the string is non-empty and does not start with `/`
/// - `InvalidEncoding` if a segment's percent-escapes are not UTF-8
///
/// # Example
///
/// ```
/// use json_pointer_find::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer("").unwrap(), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/").unwrap(), vec![""]);
/// assert_eq!(parse_json_pointer("/foo/bar").unwrap(), vec!["foo", "bar"]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d").unwrap(), vec!["a~b", "c/d"]);
/// assert!(parse_json_pointer("foo").is_err());
/// ```
pub fn parse_json_pointer(pointer: &str) -> Result<Vec<String>, JsonPointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let Some(body) = pointer.strip_prefix('/') else {
        tracing::debug!(target: "json_pointer", pointer, "pointer does not start with '/'");
        return Err(JsonPointerError::MalformedPointer {
            pointer: pointer.to_string(),
        });
    };
    body.split('/')
        .enumerate()
        .map(|(position, raw)| {
            decode_component(raw).map_err(|err| {
                tracing::debug!(
                    target: "json_pointer",
                    position,
                    token = raw,
                    error = %err,
                    "pointer token is not valid UTF-8 after percent-decoding"
                );
                JsonPointerError::InvalidEncoding {
                    position,
                    token: raw.to_string(),
                }
            })
        })
        .collect()
}

/// Parse a JSON Pointer string that may not have a leading `/`.
///
/// A string without the leading `/` is read as if it had one.
pub fn parse_json_pointer_relaxed(pointer: &str) -> Result<Vec<String>, JsonPointerError> {
    if pointer.starts_with('/') || pointer.is_empty() {
        return parse_json_pointer(pointer);
    }
    let mut absolute = String::with_capacity(pointer.len() + 1);
    absolute.push('/');
    absolute.push_str(pointer);
    parse_json_pointer(&absolute)
}

/// Format decoded tokens into a JSON Pointer string.
///
/// Returns an empty string for the root path (no tokens).
///
/// # Example
///
/// ```
/// use json_pointer_find::format_json_pointer;
///
/// assert_eq!(format_json_pointer::<String>(&[]), "");
/// assert_eq!(format_json_pointer(&["foo"]), "/foo");
/// assert_eq!(format_json_pointer(&["a~b", "c/d"]), "/a~0b/c~1d");
/// ```
pub fn format_json_pointer<S: AsRef<str>>(path: &[S]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&encode_component(component.as_ref()));
    }
    out
}

/// Check if a string is a valid RFC 6901 array index.
///
/// Only ASCII digits, and no leading zero unless the index is `0` itself.
///
/// # Example
///
/// ```
/// use json_pointer_find::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}
