//! Conversion error type.
//!
//! A conversion failure is raised at the point of failure and re-wrapped once
//! per enclosing object property or array element on the way out, so the error
//! that reaches the caller carries the full path to the offending value.

use serde_json::Value;

use crate::path::ValuePath;

/// An error produced by [`Matcher::convert`](crate::Matcher::convert).
///
/// Leaf failures are [`TypeMismatch`](ConvertError::TypeMismatch); composite
/// matchers wrap child failures with the failing property name or element
/// index. The `Display` output nests, so the message alone names the whole
/// failure path:
///
/// ```text
/// convert failed on property a due to convert failed on property b due to cannot convert "x" to number
/// ```
///
/// Use [`path`](ConvertError::path) to recover the location as a structured
/// [`ValuePath`] and [`innermost`](ConvertError::innermost) for the leaf
/// failure itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// The value cannot be converted to the target type.
    #[error("cannot convert {got} to {expected}")]
    TypeMismatch {
        /// A rendering of the offending value.
        got: String,
        /// The target type or class name.
        expected: String,
    },

    /// A property of an object failed to convert.
    #[error("convert failed on property {key} due to {source}")]
    Property {
        /// The declared property name that failed.
        key: String,
        /// The underlying failure.
        #[source]
        source: Box<ConvertError>,
    },

    /// An element of an array failed to convert.
    #[error("convert failed on element {index} due to {source}")]
    Element {
        /// The zero-based index that failed.
        index: usize,
        /// The underlying failure.
        #[source]
        source: Box<ConvertError>,
    },

    /// A registry reference could not be resolved at call time.
    #[error("matcher '{name}' is not registered")]
    UnresolvedReference {
        /// The missing registry name.
        name: String,
    },
}

impl ConvertError {
    /// Creates a leaf mismatch error for the given value and target type.
    pub fn mismatch(value: Option<&Value>, expected: impl Into<String>) -> Self {
        ConvertError::TypeMismatch {
            got: value_summary(value),
            expected: expected.into(),
        }
    }

    /// Wraps an error with the object property that failed.
    pub fn property(key: impl Into<String>, source: ConvertError) -> Self {
        ConvertError::Property {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Wraps an error with the array index that failed.
    pub fn element(index: usize, source: ConvertError) -> Self {
        ConvertError::Element {
            index,
            source: Box::new(source),
        }
    }

    /// Returns the path to the failing value, built from the wrapping chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use remold::ConvertError;
    ///
    /// let leaf = ConvertError::mismatch(None, "number");
    /// let err = ConvertError::property("user", ConvertError::element(2, leaf));
    /// assert_eq!(err.path().to_string(), "user[2]");
    /// ```
    pub fn path(&self) -> ValuePath {
        let mut path = ValuePath::root();
        let mut current = self;
        loop {
            match current {
                ConvertError::Property { key, source } => {
                    path = path.push_field(key);
                    current = source;
                }
                ConvertError::Element { index, source } => {
                    path = path.push_index(*index);
                    current = source;
                }
                _ => return path,
            }
        }
    }

    /// Returns the innermost (leaf) failure, unwrapping all path context.
    pub fn innermost(&self) -> &ConvertError {
        let mut current = self;
        loop {
            match current {
                ConvertError::Property { source, .. } | ConvertError::Element { source, .. } => {
                    current = source;
                }
                _ => return current,
            }
        }
    }
}

/// Renders a candidate value for error messages.
///
/// Scalars render as their JSON text (strings quoted); composites render as
/// a type name to keep messages short. The absent sentinel renders as
/// "nothing".
pub(crate) fn value_summary(value: Option<&Value>) -> String {
    match value {
        None => "nothing".to_string(),
        Some(Value::Array(_)) => "array".to_string(),
        Some(Value::Object(_)) => "object".to_string(),
        Some(scalar) => scalar.to_string(),
    }
}

// ConvertError crosses thread boundaries in practice via error propagation
// from shared matcher trees.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ConvertError>();
    assert_sync::<ConvertError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mismatch_message() {
        let err = ConvertError::mismatch(Some(&json!("x")), "number");
        assert_eq!(err.to_string(), "cannot convert \"x\" to number");
    }

    #[test]
    fn test_mismatch_absent_value() {
        let err = ConvertError::mismatch(None, "string");
        assert_eq!(err.to_string(), "cannot convert nothing to string");
    }

    #[test]
    fn test_property_wrapping_preserves_inner_message() {
        let leaf = ConvertError::mismatch(Some(&json!(true)), "number");
        let err = ConvertError::property("age", leaf);
        assert_eq!(
            err.to_string(),
            "convert failed on property age due to cannot convert true to number"
        );
    }

    #[test]
    fn test_element_wrapping() {
        let leaf = ConvertError::mismatch(Some(&json!("x")), "number");
        let err = ConvertError::element(3, leaf);
        assert_eq!(
            err.to_string(),
            "convert failed on element 3 due to cannot convert \"x\" to number"
        );
    }

    #[test]
    fn test_path_composition() {
        let leaf = ConvertError::mismatch(Some(&json!("x")), "number");
        let err = ConvertError::property(
            "user",
            ConvertError::property("addresses", ConvertError::element(2, ConvertError::property("zip", leaf))),
        );
        assert_eq!(err.path().to_string(), "user.addresses[2].zip");
    }

    #[test]
    fn test_innermost() {
        let leaf = ConvertError::mismatch(Some(&json!("x")), "number");
        let err = ConvertError::property("a", ConvertError::element(0, leaf.clone()));
        assert_eq!(err.innermost(), &leaf);
    }

    #[test]
    fn test_leaf_path_is_root() {
        let err = ConvertError::mismatch(Some(&json!(1)), "string");
        assert!(err.path().is_root());
        assert_eq!(err.innermost(), &err);
    }

    #[test]
    fn test_value_summary_shapes() {
        assert_eq!(value_summary(Some(&json!([1, 2]))), "array");
        assert_eq!(value_summary(Some(&json!({"a": 1}))), "object");
        assert_eq!(value_summary(Some(&json!(null))), "null");
        assert_eq!(value_summary(Some(&json!(42))), "42");
    }
}
