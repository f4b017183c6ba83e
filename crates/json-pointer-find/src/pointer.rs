//! The [`JsonPointer`] value type.

use std::fmt;
use std::str::FromStr;

use crate::find::{self, NEW_ELEMENT_TOKEN};
use crate::types::{JsonTree, Path, Reference};
use crate::util::{format_json_pointer, parse_json_pointer, parse_json_pointer_relaxed};
use crate::validate::{validate_json_pointer, validate_path, Limits};
use crate::JsonPointerError;

/// A parsed JSON Pointer (RFC 6901).
///
/// Holds the fully decoded reference tokens. The default value is the root
/// pointer, which has no tokens. A pointer is never modified after it is built;
/// [`parent_pointer`](Self::parent_pointer) and [`child`](Self::child) return
/// new values.
///
/// # Example
///
/// ```
/// use json_pointer_find::JsonPointer;
/// use serde_json::json;
///
/// let doc = json!({"foo": ["bar", "baz"]});
/// let pointer = JsonPointer::parse("/foo/0").unwrap();
/// assert_eq!(pointer.find(&doc).unwrap(), &json!("bar"));
///
/// let append = JsonPointer::parse("/foo/-").unwrap();
/// assert!(append.is_new_pointer());
/// assert_eq!(append.parent_pointer().unwrap().to_string(), "/foo");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JsonPointer {
    tokens: Path,
}

impl JsonPointer {
    /// The pointer to the whole document.
    pub const fn root() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Parse a pointer string.
    ///
    /// The string is either empty or starts with `/`; anything else fails with
    /// `MalformedPointer`.
    pub fn parse(pointer: &str) -> Result<Self, JsonPointerError> {
        Ok(Self {
            tokens: parse_json_pointer(pointer)?,
        })
    }

    /// Parse a pointer string, reading one without a leading `/` as if it had one.
    pub fn parse_relaxed(pointer: &str) -> Result<Self, JsonPointerError> {
        Ok(Self {
            tokens: parse_json_pointer_relaxed(pointer)?,
        })
    }

    /// Parse a pointer string, rejecting it if it exceeds `limits`.
    pub fn parse_with_limits(pointer: &str, limits: &Limits) -> Result<Self, JsonPointerError> {
        validate_json_pointer(pointer, limits)?;
        let parsed = Self::parse(pointer)?;
        validate_path(&parsed.tokens, limits)?;
        Ok(parsed)
    }

    /// Build a pointer from already decoded tokens.
    ///
    /// ```
    /// use json_pointer_find::JsonPointer;
    ///
    /// let pointer = JsonPointer::from_tokens(["a/b", "m~n"]);
    /// assert_eq!(pointer.to_string(), "/a~1b/m~0n");
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Path {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check if the pointer references the whole document.
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last_token(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// Check if the last token is the array append marker `-`.
    ///
    /// Pure check on the tokens, the document is not consulted.
    pub fn is_new_pointer(&self) -> bool {
        self.last_token() == Some(NEW_ELEMENT_TOKEN)
    }

    /// The pointer with its last token removed.
    ///
    /// # Errors
    ///
    /// Returns `NoParent` for the root pointer.
    pub fn parent_pointer(&self) -> Result<Self, JsonPointerError> {
        match self.tokens.split_last() {
            Some((_, init)) => Ok(Self {
                tokens: init.to_vec(),
            }),
            None => Err(JsonPointerError::NoParent),
        }
    }

    /// The pointer with `token` appended.
    pub fn child(&self, token: impl Into<String>) -> Self {
        let mut tokens = Vec::with_capacity(self.tokens.len() + 1);
        tokens.extend_from_slice(&self.tokens);
        tokens.push(token.into());
        Self { tokens }
    }

    /// Check if `other` lies strictly below this pointer.
    pub fn is_ancestor_of(&self, other: &JsonPointer) -> bool {
        self.tokens.len() < other.tokens.len() && other.tokens.starts_with(&self.tokens)
    }

    /// Resolve the pointer against `root`.
    ///
    /// See [`find`](crate::find()) for the failure conditions.
    pub fn find<'a, T: JsonTree + ?Sized>(&self, root: &'a T) -> Result<&'a T, JsonPointerError> {
        find::find(root, &self.tokens)
    }

    pub fn get<'a, T: JsonTree + ?Sized>(&self, root: &'a T) -> Option<&'a T> {
        find::get(root, &self.tokens)
    }

    /// Locate the slot the pointer addresses, see [`locate`](crate::locate()).
    pub fn locate<'a, T: JsonTree + ?Sized>(
        &self,
        root: &'a T,
    ) -> Result<Reference<'a, T>, JsonPointerError> {
        find::locate(root, &self.tokens)
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_json_pointer(&self.tokens))
    }
}

impl FromStr for JsonPointer {
    type Err = JsonPointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for JsonPointer {
    type Error = JsonPointerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<[String]> for JsonPointer {
    fn as_ref(&self) -> &[String] {
        &self.tokens
    }
}
