//! JSON Pointer (RFC 6901) resolution.
//!
//! This crate resolves [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901)
//! strings against an already parsed JSON document. Documents are read through
//! the [`JsonTree`] trait, implemented here for [`serde_json::Value`].
//!
//! Reference tokens are percent-decoded first and tilde-unescaped second, so
//! `/c%25d` addresses the member `c%d` and `/a~1b` addresses `a/b`.
//!
//! # Example
//!
//! ```
//! use json_pointer_find::{JsonPointer, JsonPointerError};
//! use serde_json::json;
//!
//! let doc = json!({"foo": ["bar", "baz"], "": 0});
//!
//! let pointer = JsonPointer::parse("/foo/0").unwrap();
//! assert_eq!(pointer.find(&doc).unwrap(), &json!("bar"));
//!
//! let empty_key = JsonPointer::parse("/").unwrap();
//! assert_eq!(empty_key.find(&doc).unwrap(), &json!(0));
//!
//! let missing = JsonPointer::parse("/foo/10").unwrap();
//! assert!(matches!(
//!     missing.find(&doc),
//!     Err(JsonPointerError::IndexOutOfRange { position: 1, .. })
//! ));
//! ```

use thiserror::Error;

pub mod find;
pub mod pointer;
pub mod types;
pub mod util;
pub mod validate;

pub use find::{find, find_by_pointer, get, locate, NEW_ELEMENT_TOKEN};
pub use pointer::JsonPointer;
pub use types::{JsonTree, NodeKind, Path, PathStep, Reference, ReferenceKey};
pub use util::{
    decode_component, encode_component, escape_component, format_json_pointer, is_valid_index,
    parse_json_pointer, parse_json_pointer_relaxed, unescape_component,
};
pub use validate::{validate_json_pointer, validate_path, Limits};

/// Token positions are zero-based indexes into the decoded token sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("POINTER_INVALID: {pointer:?} must be empty or start with '/'")]
    MalformedPointer { pointer: String },
    #[error("INVALID_ENCODING: token {position} ({token:?}) is not UTF-8 after percent-decoding")]
    InvalidEncoding { position: usize, token: String },
    #[error("INVALID_INDEX: token {position} ({token:?}) is not an array index")]
    InvalidIndex { position: usize, token: String },
    #[error("INDEX_OUT_OF_RANGE: token {position} ({token:?}) is past the end of an array of length {len}")]
    IndexOutOfRange {
        position: usize,
        token: String,
        len: usize,
    },
    #[error("NOT_FOUND: token {position} ({key:?}) is not a member of the object")]
    KeyNotFound { position: usize, key: String },
    #[error("NOT_A_CONTAINER: token {position} ({token:?}) cannot descend into a scalar")]
    CannotDescendIntoScalar { position: usize, token: String },
    #[error("NO_PARENT")]
    NoParent,
    #[error("POINTER_TOO_LONG: {len} bytes, limit is {max}")]
    PointerTooLong { len: usize, max: usize },
    #[error("PATH_TOO_LONG: {depth} tokens, limit is {max}")]
    PathTooLong { depth: usize, max: usize },
}

impl JsonPointerError {
    /// Position of the offending token, for errors raised at a token.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidEncoding { position, .. }
            | Self::InvalidIndex { position, .. }
            | Self::IndexOutOfRange { position, .. }
            | Self::KeyNotFound { position, .. }
            | Self::CannotDescendIntoScalar { position, .. } => Some(*position),
            Self::MalformedPointer { .. }
            | Self::NoParent
            | Self::PointerTooLong { .. }
            | Self::PathTooLong { .. } => None,
        }
    }

    /// Text of the offending token, for errors raised at a token.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::InvalidEncoding { token, .. }
            | Self::InvalidIndex { token, .. }
            | Self::IndexOutOfRange { token, .. }
            | Self::CannotDescendIntoScalar { token, .. } => Some(token.as_str()),
            Self::KeyNotFound { key, .. } => Some(key.as_str()),
            Self::MalformedPointer { .. }
            | Self::NoParent
            | Self::PointerTooLong { .. }
            | Self::PathTooLong { .. } => None,
        }
    }
}
