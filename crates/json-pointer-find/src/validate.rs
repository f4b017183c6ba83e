//! Size limits for JSON Pointers.

use crate::JsonPointerError;

/// Default maximum pointer string length, in bytes.
pub const MAX_POINTER_LENGTH: usize = 1024;

/// Default maximum number of reference tokens.
pub const MAX_PATH_LENGTH: usize = 256;

/// Bounds applied by [`JsonPointer::parse_with_limits`](crate::JsonPointer::parse_with_limits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Longest accepted pointer string, in bytes.
    pub max_pointer_len: usize,
    /// Most reference tokens a pointer may carry.
    pub max_depth: usize,
}

impl Limits {
    /// Limits that accept every pointer.
    pub const fn unbounded() -> Self {
        Self {
            max_pointer_len: usize::MAX,
            max_depth: usize::MAX,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_pointer_len: MAX_POINTER_LENGTH,
            max_depth: MAX_PATH_LENGTH,
        }
    }
}

/// Validate a JSON Pointer string.
///
/// # Errors
///
/// - `MalformedPointer` if the pointer is non-empty but doesn't start with `/`
/// - `PointerTooLong` if the pointer exceeds `limits.max_pointer_len`
///
/// # Example
///
/// ```
/// use json_pointer_find::{validate_json_pointer, Limits};
///
/// let limits = Limits::default();
/// validate_json_pointer("", &limits).unwrap();
/// validate_json_pointer("/foo/bar", &limits).unwrap();
/// validate_json_pointer("foo", &limits).unwrap_err();
/// ```
pub fn validate_json_pointer(pointer: &str, limits: &Limits) -> Result<(), JsonPointerError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(JsonPointerError::MalformedPointer {
            pointer: pointer.to_string(),
        });
    }
    if pointer.len() > limits.max_pointer_len {
        return Err(JsonPointerError::PointerTooLong {
            len: pointer.len(),
            max: limits.max_pointer_len,
        });
    }
    Ok(())
}

/// Validate a decoded token sequence against `limits.max_depth`.
///
/// # Example
///
/// ```
/// use json_pointer_find::{validate_path, Limits};
///
/// let limits = Limits::default();
/// validate_path(&["foo", "bar"], &limits).unwrap();
/// validate_path(&(0..300).map(|i| i.to_string()).collect::<Vec<_>>(), &limits).unwrap_err();
/// ```
pub fn validate_path<S: AsRef<str>>(path: &[S], limits: &Limits) -> Result<(), JsonPointerError> {
    if path.len() > limits.max_depth {
        return Err(JsonPointerError::PathTooLong {
            depth: path.len(),
            max: limits.max_depth,
        });
    }
    Ok(())
}
