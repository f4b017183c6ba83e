//! Type definitions for JSON Pointer.

use serde_json::Value;

/// A decoded reference token.
pub type PathStep = String;

/// A decoded JSON Pointer path.
pub type Path = Vec<PathStep>;

/// Shape of a tree node, as far as pointer resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Array,
    Object,
    /// Null, boolean, number, or string.
    Scalar,
}

/// Read access to a JSON document tree.
///
/// Resolution only needs to tell arrays from objects from scalars and to look
/// up one child at a time. Lookups on the wrong kind of node return `None`.
pub trait JsonTree {
    fn kind(&self) -> NodeKind;

    /// Number of elements, `None` unless the node is an array.
    fn array_len(&self) -> Option<usize>;

    /// Array element at `index`.
    fn child_at(&self, index: usize) -> Option<&Self>;

    /// Object member named `key`.
    fn child(&self, key: &str) -> Option<&Self>;
}

impl JsonTree for Value {
    fn kind(&self) -> NodeKind {
        match self {
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
            _ => NodeKind::Scalar,
        }
    }

    fn array_len(&self) -> Option<usize> {
        self.as_array().map(Vec::len)
    }

    fn child_at(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    fn child(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }
}

/// How the last step of a pointer addresses its parent container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReferenceKey {
    /// Array position. Equal to the array length for the `-` token.
    Index(usize),
    /// Object member name.
    Key(String),
}

/// A located slot in a JSON document.
///
/// Contains the container, the key into it, and the value currently stored
/// there, if any.
#[derive(Debug)]
pub struct Reference<'a, T: ?Sized> {
    /// The array or object holding the slot.
    pub parent: &'a T,
    pub key: ReferenceKey,
    /// `None` for a missing member or a position at the end of an array.
    pub target: Option<&'a T>,
}

impl<T: ?Sized> Clone for Reference<'_, T> {
    fn clone(&self) -> Self {
        Self {
            parent: self.parent,
            key: self.key.clone(),
            target: self.target,
        }
    }
}

impl<T: JsonTree + ?Sized> Reference<'_, T> {
    /// Check if this reference points to an array element.
    pub fn is_array_reference(&self) -> bool {
        self.parent.kind() == NodeKind::Array
    }

    /// Check if this reference points to an object property.
    pub fn is_object_reference(&self) -> bool {
        self.parent.kind() == NodeKind::Object
    }

    /// Check if this reference points just past the last array element.
    pub fn is_array_end(&self) -> bool {
        match (&self.key, self.parent.array_len()) {
            (ReferenceKey::Index(idx), Some(len)) => *idx == len,
            _ => false,
        }
    }

    /// Get the numeric index if this is an array reference.
    pub fn index(&self) -> Option<usize> {
        match self.key {
            ReferenceKey::Index(idx) => Some(idx),
            ReferenceKey::Key(_) => None,
        }
    }
}
