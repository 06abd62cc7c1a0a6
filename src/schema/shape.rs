//! Object shape builder.

use indexmap::IndexMap;

use super::SchemaNode;

/// An ordered mapping from property name to nested schema.
///
/// `ObjectShape` describes an object whose declared properties must each
/// satisfy their nested schema. Properties absent from the shape are ignored
/// on the input value: matching is a structural subset check, and conversion
/// projects the input down to exactly the declared properties.
///
/// # Example
///
/// ```rust
/// use remold::{convert, Schema, SchemaNode};
/// use serde_json::json;
///
/// let schema: SchemaNode = Schema::object()
///     .field("a", Schema::string())
///     .into();
///
/// // Undeclared property "b" is dropped from the output.
/// let value = convert(&schema, &json!({"a": 1, "b": 2})).unwrap();
/// assert_eq!(value, json!({"a": "1"}));
/// ```
#[derive(Clone, Default)]
pub struct ObjectShape {
    fields: IndexMap<String, SchemaNode>,
}

impl ObjectShape {
    /// Creates an empty shape. An empty shape accepts any object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declared property with its nested schema.
    ///
    /// Declaring the same name twice replaces the earlier schema. Declaration
    /// order is preserved and determines match/convert order.
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<SchemaNode>) -> Self {
        self.fields.insert(name.into(), schema.into());
        self
    }

    /// Returns the number of declared properties.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no properties are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over declared properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    #[test]
    fn test_empty_shape() {
        let shape = ObjectShape::new();
        assert!(shape.is_empty());
        assert_eq!(shape.len(), 0);
    }

    #[test]
    fn test_field_order_preserved() {
        let shape = Schema::object()
            .field("z", Schema::string())
            .field("a", Schema::number())
            .field("m", Schema::boolean());

        let names: Vec<_> = shape.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_duplicate_field_replaces() {
        let shape = Schema::object()
            .field("a", Schema::string())
            .field("a", Schema::number());
        assert_eq!(shape.len(), 1);
    }
}
