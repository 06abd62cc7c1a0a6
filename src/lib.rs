//! # Remold
//!
//! A schema-driven matcher that checks an arbitrary untyped value against a
//! declarative schema and, on success, converts it into a canonical typed
//! value — or fails with a precise, path-annotated error.
//!
//! ## Overview
//!
//! A [`SchemaNode`] describes an expected shape: primitives, literal tokens,
//! objects, homogeneous arrays, runtime type-identity probes, optional
//! wrappers, and embedded matchers. [`resolve`] turns a node into a
//! [`Matcher`] exposing three operations:
//!
//! - **loose match** — coercion-tolerant acceptance (`"42"` counts as a
//!   number), used to decide whether conversion can succeed;
//! - **strict match** — the value must already have the exact runtime type;
//! - **convert** — produce the canonical value, or fail with a
//!   [`ConvertError`] that names the full property/index path to the
//!   offending value.
//!
//! The engine performs no I/O, knows nothing about HTTP, and holds no shared
//! mutable state outside the optional [`MatcherRegistry`].
//!
//! ## Example
//!
//! ```rust
//! use remold::{convert, matches, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::object()
//!     .field("name", Schema::string())
//!     .field("age", Schema::number())
//!     .field("tags", Schema::array(Schema::string()))
//!     .into();
//!
//! // Strings decoded from a query or form body coerce to their targets.
//! let value = convert(&schema, &json!({
//!     "name": "Alice",
//!     "age": "30",
//!     "tags": ["a", "b"],
//!     "extra": "dropped"
//! })).unwrap();
//! assert_eq!(value, json!({"name": "Alice", "age": 30, "tags": ["a", "b"]}));
//!
//! // Strict matching applies no coercion.
//! assert!(!matches(&schema, &json!({"name": "Alice", "age": "30", "tags": []})));
//!
//! // Failures carry the path to the offending value.
//! let err = convert(&schema, &json!({"name": "Alice", "age": "x", "tags": []})).unwrap_err();
//! assert_eq!(err.path().to_string(), "age");
//! ```
//!
//! ## Recursion
//!
//! Recursion depth equals schema/input nesting depth. The engine enforces no
//! recursion limit: a self-referential schema (via [`MatcherRegistry`]
//! references) recurses as deep as the input data nests, and bounding schema
//! or input depth is the caller's responsibility.

pub mod error;
pub mod matcher;
pub mod path;
pub mod registry;
pub mod schema;

pub use error::ConvertError;
pub use matcher::{
    resolve, ArrayMatcher, BooleanMatcher, ClassMatcher, ExactMatcher, Matcher, NumberMatcher,
    ObjectMatcher, OptionalMatcher, StringMatcher,
};
pub use path::{PathSegment, ValuePath};
pub use registry::{MatcherRegistry, RegistryError};
pub use schema::{ClassTag, ObjectShape, Schema, SchemaNode};

use serde_json::Value;

/// Type alias for matcher conversion results.
///
/// `Ok(None)` is the accepted absent sentinel (optional schemas only).
pub type ConvertResult = Result<Option<Value>, ConvertError>;

/// Coercion-tolerant predicate: can `value` be converted to `schema`'s shape?
pub fn loose_matches(schema: &SchemaNode, value: &Value) -> bool {
    resolve(schema).match_loose(Some(value))
}

/// Strict predicate: does `value` already have `schema`'s shape, with no
/// coercion?
pub fn matches(schema: &SchemaNode, value: &Value) -> bool {
    resolve(schema).matches(Some(value))
}

/// Converts `value` into the canonical shape described by `schema`.
///
/// # Errors
///
/// Fails with a path-annotated [`ConvertError`] when any part of the value
/// cannot be coerced to its declared shape.
pub fn convert(schema: &SchemaNode, value: &Value) -> Result<Value, ConvertError> {
    let converted = resolve(schema).convert(Some(value))?;
    // Only an absent input can yield the absent sentinel; the input here is
    // always present.
    Ok(converted.unwrap_or(Value::Null))
}
