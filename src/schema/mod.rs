//! Schema definitions.
//!
//! A [`SchemaNode`] is a declarative, immutable description of an expected
//! value shape. Nodes are pure data: the same node may be resolved and
//! traversed any number of times, and resolution is deterministic and
//! side-effect-free.
//!
//! # Example
//!
//! ```rust
//! use remold::{convert, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::object()
//!     .field("name", Schema::string())
//!     .field("age", Schema::number())
//!     .into();
//!
//! let value = convert(&schema, &json!({"name": "Alice", "age": "30"})).unwrap();
//! assert_eq!(value, json!({"name": "Alice", "age": 30}));
//! ```

mod class;
mod shape;

pub use class::ClassTag;
pub use shape::ObjectShape;

use std::sync::Arc;

use serde_json::Value;

use crate::matcher::Matcher;

/// A declarative description of an expected value shape.
///
/// `SchemaNode` is a closed union; matcher resolution dispatches over it with
/// an exhaustive `match`. Nodes are cheap to clone (composite nodes share
/// their embedded matchers via `Arc`).
#[derive(Clone)]
pub enum SchemaNode {
    /// Matches any string; loosely matches anything stringifiable.
    String,
    /// Matches any number; loosely matches anything numerically coercible.
    Number,
    /// Matches any boolean; loosely matches `"true"`/`"false"` too.
    Boolean,
    /// Matches exactly one literal scalar.
    Exact(Value),
    /// Matches objects whose declared properties satisfy their nested
    /// schemas. Undeclared input properties are ignored.
    Object(ObjectShape),
    /// Matches homogeneous arrays of the element schema.
    Array(Box<SchemaNode>),
    /// Matches values accepted by a runtime type-identity probe.
    Class(ClassTag),
    /// An already-resolved matcher embedded as a schema.
    Resolved(Arc<dyn Matcher>),
    /// Additionally accepts the absent-value sentinel.
    Optional(Box<SchemaNode>),
}

impl From<ObjectShape> for SchemaNode {
    fn from(shape: ObjectShape) -> Self {
        SchemaNode::Object(shape)
    }
}

/// Entry point for building schemas.
///
/// `Schema` provides factory methods for every schema node kind. Object
/// schemas use a builder ([`ObjectShape::field`]) so nested shapes read
/// declaratively:
///
/// ```rust
/// use remold::Schema;
///
/// let schema = Schema::object()
///     .field("id", Schema::number())
///     .field("tags", Schema::array(Schema::string()))
///     .field("nickname", Schema::optional(Schema::string()));
/// ```
pub struct Schema;

impl Schema {
    /// A schema matching string values.
    pub fn string() -> SchemaNode {
        SchemaNode::String
    }

    /// A schema matching numeric values.
    pub fn number() -> SchemaNode {
        SchemaNode::Number
    }

    /// A schema matching boolean values.
    pub fn boolean() -> SchemaNode {
        SchemaNode::Boolean
    }

    /// A schema matching objects property-by-property.
    ///
    /// The returned [`ObjectShape`] is a builder; add properties with
    /// [`field`](ObjectShape::field) and pass it anywhere a schema is
    /// expected.
    pub fn object() -> ObjectShape {
        ObjectShape::new()
    }

    /// A schema matching homogeneous arrays of `element`.
    pub fn array(element: impl Into<SchemaNode>) -> SchemaNode {
        SchemaNode::Array(Box::new(element.into()))
    }

    /// A schema matching exactly the literal `token`.
    ///
    /// Conversion of an exact schema always yields the stored token; the
    /// candidate only influences the match operations.
    pub fn exact(token: impl Into<Value>) -> SchemaNode {
        SchemaNode::Exact(token.into())
    }

    /// A schema matching values that pass a runtime type-identity probe.
    ///
    /// # Example
    ///
    /// ```rust
    /// use remold::{matches, Schema};
    /// use serde_json::json;
    ///
    /// let uuid = Schema::class("Uuid", |v| {
    ///     v.as_str().is_some_and(|s| s.len() == 36 && s.chars().filter(|c| *c == '-').count() == 4)
    /// });
    ///
    /// assert!(matches(&uuid, &json!("123e4567-e89b-12d3-a456-426614174000")));
    /// assert!(!matches(&uuid, &json!("not a uuid")));
    /// ```
    pub fn class<F>(name: impl Into<String>, probe: F) -> SchemaNode
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        SchemaNode::Class(ClassTag::new(name, probe))
    }

    /// Wraps a schema so the absent-value sentinel is also accepted.
    ///
    /// Optional only special-cases absence; a present `null` is still
    /// checked by the inner schema.
    pub fn optional(inner: impl Into<SchemaNode>) -> SchemaNode {
        SchemaNode::Optional(Box::new(inner.into()))
    }

    /// Embeds an already-resolved matcher as a schema.
    pub fn matcher(matcher: Arc<dyn Matcher>) -> SchemaNode {
        SchemaNode::Resolved(matcher)
    }
}
