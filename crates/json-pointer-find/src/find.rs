//! Pointer resolution over any [`JsonTree`].

use crate::types::{JsonTree, NodeKind, Reference, ReferenceKey};
use crate::util::{is_valid_index, parse_json_pointer};
use crate::JsonPointerError;

/// Token marking the position past the last array element.
pub const NEW_ELEMENT_TOKEN: &str = "-";

/// Find a value in a JSON document by decoded path.
///
/// Resolution stops at the first token that cannot be followed.
///
/// # Errors
///
/// - `InvalidIndex` - an array step is not a canonical integer (this includes `-`)
/// - `IndexOutOfRange` - an array step has no element
/// - `KeyNotFound` - an object step names a missing member
/// - `CannotDescendIntoScalar` - a step remains but the current node is a scalar
///
/// # Example
///
/// ```
/// use json_pointer_find::find;
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": [10, 20]}});
/// assert_eq!(find(&doc, &["foo", "bar", "1"]).unwrap(), &json!(20));
/// assert_eq!(find(&doc, &[] as &[&str]).unwrap(), &doc);
/// ```
pub fn find<'a, T, S>(root: &'a T, path: &[S]) -> Result<&'a T, JsonPointerError>
where
    T: JsonTree + ?Sized,
    S: AsRef<str>,
{
    let mut current = root;
    for (position, step) in path.iter().enumerate() {
        let step = step.as_ref();
        current = match descend(current, step, position) {
            Ok(next) => next,
            Err(err) => {
                tracing::debug!(
                    target: "json_pointer",
                    position,
                    token = step,
                    error = %err,
                    "pointer resolution failed"
                );
                return Err(err);
            }
        };
        tracing::trace!(target: "json_pointer", position, token = step, "descended");
    }
    Ok(current)
}

/// Get a value from a JSON document by decoded path.
///
/// Returns `None` wherever [`find`] would fail.
///
/// # Example
///
/// ```
/// use json_pointer_find::get;
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": 42}});
/// assert_eq!(get(&doc, &["foo", "bar"]), Some(&json!(42)));
/// assert_eq!(get(&doc, &["missing"]), None);
/// ```
pub fn get<'a, T, S>(root: &'a T, path: &[S]) -> Option<&'a T>
where
    T: JsonTree + ?Sized,
    S: AsRef<str>,
{
    find(root, path).ok()
}

/// Parse `pointer` and find the value it references.
///
/// # Example
///
/// ```
/// use json_pointer_find::find_by_pointer;
/// use serde_json::json;
///
/// let doc = json!({"a/b": [true]});
/// assert_eq!(find_by_pointer("/a~1b/0", &doc).unwrap(), &json!(true));
/// ```
pub fn find_by_pointer<'a, T>(pointer: &str, root: &'a T) -> Result<&'a T, JsonPointerError>
where
    T: JsonTree + ?Sized,
{
    let path = parse_json_pointer(pointer)?;
    find(root, &path)
}

/// Locate the slot a path addresses without dereferencing its last step.
///
/// The parent container is resolved with [`find`]. The last step is then
/// described against it: `-` on an array is the append position, an index equal
/// to the array length is accepted, and a missing object member is reported
/// with no target.
///
/// # Errors
///
/// - `NoParent` for the root path
/// - any error [`find`] reports while resolving the parent
/// - `InvalidIndex` / `IndexOutOfRange` for a bad last array step
/// - `CannotDescendIntoScalar` when the parent is a scalar
///
/// # Example
///
/// ```
/// use json_pointer_find::{locate, ReferenceKey};
/// use serde_json::json;
///
/// let doc = json!({"foo": ["bar", "baz"]});
/// let reference = locate(&doc, &["foo", "-"]).unwrap();
/// assert_eq!(reference.key, ReferenceKey::Index(2));
/// assert!(reference.target.is_none());
/// ```
pub fn locate<'a, T, S>(root: &'a T, path: &[S]) -> Result<Reference<'a, T>, JsonPointerError>
where
    T: JsonTree + ?Sized,
    S: AsRef<str>,
{
    let Some((last, init)) = path.split_last() else {
        return Err(JsonPointerError::NoParent);
    };
    let parent = find(root, init)?;
    let position = init.len();
    let last = last.as_ref();

    match parent.kind() {
        NodeKind::Array => {
            let len = parent.array_len().unwrap_or(0);
            let idx = if last == NEW_ELEMENT_TOKEN {
                len
            } else {
                let idx = parse_index(last, position, len)?;
                if idx > len {
                    return Err(JsonPointerError::IndexOutOfRange {
                        position,
                        token: last.to_string(),
                        len,
                    });
                }
                idx
            };
            Ok(Reference {
                parent,
                key: ReferenceKey::Index(idx),
                target: parent.child_at(idx),
            })
        }
        NodeKind::Object => Ok(Reference {
            parent,
            key: ReferenceKey::Key(last.to_string()),
            target: parent.child(last),
        }),
        NodeKind::Scalar => Err(JsonPointerError::CannotDescendIntoScalar {
            position,
            token: last.to_string(),
        }),
    }
}

fn descend<'a, T>(current: &'a T, step: &str, position: usize) -> Result<&'a T, JsonPointerError>
where
    T: JsonTree + ?Sized,
{
    match current.kind() {
        NodeKind::Array => {
            let len = current.array_len().unwrap_or(0);
            let idx = parse_index(step, position, len)?;
            current
                .child_at(idx)
                .ok_or_else(|| JsonPointerError::IndexOutOfRange {
                    position,
                    token: step.to_string(),
                    len,
                })
        }
        NodeKind::Object => current
            .child(step)
            .ok_or_else(|| JsonPointerError::KeyNotFound {
                position,
                key: step.to_string(),
            }),
        NodeKind::Scalar => Err(JsonPointerError::CannotDescendIntoScalar {
            position,
            token: step.to_string(),
        }),
    }
}

/// Digit strings too large for `usize` still name a (missing) array position.
fn parse_index(step: &str, position: usize, len: usize) -> Result<usize, JsonPointerError> {
    if !is_valid_index(step) {
        return Err(JsonPointerError::InvalidIndex {
            position,
            token: step.to_string(),
        });
    }
    step.parse()
        .map_err(|_| JsonPointerError::IndexOutOfRange {
            position,
            token: step.to_string(),
            len,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_scalar_root() {
        let empty: &[&str] = &[];
        assert_eq!(find(&json!(123), empty).unwrap(), &json!(123));
        assert_eq!(find(&json!("foo"), empty).unwrap(), &json!("foo"));
    }

    #[test]
    fn test_find_object_key() {
        let doc = json!({"foo": "bar"});
        assert_eq!(find(&doc, &["foo"]).unwrap(), &json!("bar"));
    }

    #[test]
    fn test_find_missing_key() {
        let doc = json!({"foo": 123});
        assert_eq!(
            find(&doc, &["bar"]),
            Err(JsonPointerError::KeyNotFound {
                position: 0,
                key: "bar".to_string()
            })
        );
    }

    #[test]
    fn test_find_explicit_null() {
        let doc = json!({"foo": null});
        assert_eq!(find(&doc, &["foo"]).unwrap(), &json!(null));
    }

    #[test]
    fn test_find_array_element() {
        let doc = json!({"a": {"b": [1, 2, 3]}});
        assert_eq!(find(&doc, &["a", "b", "1"]).unwrap(), &json!(2));
    }

    #[test]
    fn test_find_array_past_end() {
        let doc = json!({"a": {"b": [1, 2, 3]}});
        assert_eq!(
            find(&doc, &["a", "b", "3"]),
            Err(JsonPointerError::IndexOutOfRange {
                position: 2,
                token: "3".to_string(),
                len: 3
            })
        );
    }

    #[test]
    fn test_find_array_dash_is_not_an_index() {
        let doc = json!({"a": {"b": [1, 2, 3]}});
        assert_eq!(
            find(&doc, &["a", "b", "-"]),
            Err(JsonPointerError::InvalidIndex {
                position: 2,
                token: "-".to_string()
            })
        );
    }

    #[test]
    fn test_find_dash_is_a_plain_object_key() {
        let doc = json!({"-": "dash"});
        assert_eq!(find(&doc, &["-"]).unwrap(), &json!("dash"));
    }

    #[test]
    fn test_find_invalid_index() {
        let doc = json!({"a": [1, 2, 3]});
        for bad in ["-1", "01", "+1", "x", "", "1.0"] {
            assert!(
                matches!(
                    find(&doc, &["a", bad]),
                    Err(JsonPointerError::InvalidIndex { position: 1, .. })
                ),
                "token {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_find_huge_index_is_out_of_range() {
        let doc = json!([1]);
        let huge = "184467440737095516160";
        assert_eq!(
            find(&doc, &[huge]),
            Err(JsonPointerError::IndexOutOfRange {
                position: 0,
                token: huge.to_string(),
                len: 1
            })
        );
    }

    #[test]
    fn test_find_into_scalar() {
        let doc = json!({"a": 123});
        assert_eq!(
            find(&doc, &["a", "b"]),
            Err(JsonPointerError::CannotDescendIntoScalar {
                position: 1,
                token: "b".to_string()
            })
        );
    }

    #[test]
    fn test_find_stops_at_first_error() {
        let doc = json!({"a": {}});
        assert_eq!(
            find(&doc, &["a", "b", "c"]),
            Err(JsonPointerError::KeyNotFound {
                position: 1,
                key: "b".to_string()
            })
        );
    }

    #[test]
    fn test_get() {
        let doc = json!({"a": {"b": [1, 2, 3]}});
        assert_eq!(get(&doc, &["a", "b", "1"]), Some(&json!(2)));
        assert_eq!(get(&doc, &["a", "b", "-"]), None);
        assert_eq!(get(&doc, &["a", "c"]), None);
    }

    #[test]
    fn test_find_by_pointer() {
        let doc = json!({"foo": {"bar": 42}});
        assert_eq!(find_by_pointer("/foo/bar", &doc).unwrap(), &json!(42));
        assert_eq!(find_by_pointer("", &doc).unwrap(), &doc);
        assert!(matches!(
            find_by_pointer("foo", &doc),
            Err(JsonPointerError::MalformedPointer { .. })
        ));
    }

    #[test]
    fn test_locate_array_append() {
        let doc = json!({"a": [1, 2, 3]});
        let reference = locate(&doc, &["a", "-"]).unwrap();
        assert_eq!(reference.parent, &json!([1, 2, 3]));
        assert_eq!(reference.key, ReferenceKey::Index(3));
        assert!(reference.target.is_none());
        assert!(reference.is_array_end());
    }

    #[test]
    fn test_locate_array_positions() {
        let doc = json!([1, 2, 3]);
        let reference = locate(&doc, &["1"]).unwrap();
        assert_eq!(reference.target, Some(&json!(2)));

        let reference = locate(&doc, &["3"]).unwrap();
        assert_eq!(reference.key, ReferenceKey::Index(3));
        assert!(reference.target.is_none());

        assert!(matches!(
            locate(&doc, &["4"]),
            Err(JsonPointerError::IndexOutOfRange { len: 3, .. })
        ));
        assert!(matches!(
            locate(&doc, &["x"]),
            Err(JsonPointerError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn test_locate_object_member() {
        let doc = json!({"foo": {"bar": 1}});
        let reference = locate(&doc, &["foo", "bar"]).unwrap();
        assert_eq!(reference.key, ReferenceKey::Key("bar".to_string()));
        assert_eq!(reference.target, Some(&json!(1)));
        assert!(reference.is_object_reference());

        let reference = locate(&doc, &["foo", "baz"]).unwrap();
        assert!(reference.target.is_none());
    }

    #[test]
    fn test_locate_errors() {
        let doc = json!({"foo": 1});
        let empty: &[&str] = &[];
        assert_eq!(locate(&doc, empty).unwrap_err(), JsonPointerError::NoParent);
        assert_eq!(
            locate(&doc, &["foo", "bar"]).unwrap_err(),
            JsonPointerError::CannotDescendIntoScalar {
                position: 1,
                token: "bar".to_string()
            }
        );
        assert!(matches!(
            locate(&doc, &["missing", "bar"]),
            Err(JsonPointerError::KeyNotFound { position: 0, .. })
        ));
    }
}
