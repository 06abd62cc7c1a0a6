//! Matchers and matcher resolution.
//!
//! A [`Matcher`] is a stateless behavioral view over exactly one schema node,
//! produced by [`resolve`]. Matchers expose three operations:
//!
//! - [`match_loose`](Matcher::match_loose): coercion-tolerant acceptance,
//!   used to decide whether conversion can succeed.
//! - [`matches`](Matcher::matches): strict acceptance with no coercion.
//! - [`convert`](Matcher::convert): produce the canonical typed value or fail
//!   with a path-annotated [`ConvertError`].
//!
//! All three take `Option<&Value>`: `None` is the absent-value sentinel,
//! distinct from `Value::Null`. Object matchers pass `None` down for
//! declared properties missing from the input, which is how an
//! [`Optional`](crate::Schema::optional) property lets an object omit it.

mod array;
mod class;
mod exact;
mod object;
mod optional;
mod primitive;

pub use array::ArrayMatcher;
pub use class::ClassMatcher;
pub use exact::ExactMatcher;
pub use object::ObjectMatcher;
pub use optional::OptionalMatcher;
pub use primitive::{BooleanMatcher, NumberMatcher, StringMatcher};

use std::sync::Arc;

use serde_json::Value;

use crate::error::ConvertError;
use crate::schema::SchemaNode;

/// A resolved, behavior-bearing view over one schema node.
///
/// Matchers are stateless (or hold only configuration captured at
/// resolution); identity is irrelevant, only behavior matters. The match
/// operations never fail — they return `false`; only [`convert`](Self::convert)
/// produces an error.
pub trait Matcher: Send + Sync {
    /// Coercion-tolerant acceptance test.
    fn match_loose(&self, value: Option<&Value>) -> bool;

    /// Strict acceptance test: the value must already be of the exact target
    /// runtime type.
    fn matches(&self, value: Option<&Value>) -> bool;

    /// Produces the canonical typed value.
    ///
    /// `Ok(None)` means the absent sentinel was accepted (only possible for
    /// optional schemas given an absent value); enclosing object matchers
    /// omit such properties from their output.
    fn convert(&self, value: Option<&Value>) -> Result<Option<Value>, ConvertError>;
}

/// Resolves a schema node to a matcher.
///
/// Resolution is total, deterministic, and side-effect-free: every node kind
/// maps to exactly one matcher, an already-resolved matcher passes through
/// unchanged, and resolving the same node twice yields matchers with
/// identical behavior. Children of composite nodes are resolved eagerly, so
/// a matcher tree is built once per top-level resolution rather than once
/// per recursive call.
pub fn resolve(node: &SchemaNode) -> Arc<dyn Matcher> {
    match node {
        SchemaNode::Resolved(matcher) => Arc::clone(matcher),
        SchemaNode::String => Arc::new(StringMatcher),
        SchemaNode::Number => Arc::new(NumberMatcher),
        SchemaNode::Boolean => Arc::new(BooleanMatcher),
        SchemaNode::Exact(token) => Arc::new(ExactMatcher::new(token.clone())),
        SchemaNode::Object(shape) => Arc::new(ObjectMatcher::new(shape)),
        SchemaNode::Array(element) => Arc::new(ArrayMatcher::new(resolve(element))),
        SchemaNode::Class(tag) => Arc::new(ClassMatcher::new(tag.clone())),
        SchemaNode::Optional(inner) => Arc::new(OptionalMatcher::new(resolve(inner))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use serde_json::json;

    #[test]
    fn test_resolved_node_is_identity_passthrough() {
        let inner = resolve(&Schema::number());
        let node = Schema::matcher(Arc::clone(&inner));
        let outer = resolve(&node);
        assert!(Arc::ptr_eq(&inner, &outer));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let node = Schema::array(Schema::number());
        let value = json!([1, 2, 3]);

        let first = resolve(&node).matches(Some(&value));
        let second = resolve(&node).matches(Some(&value));
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn test_resolution_covers_every_kind() {
        let nodes = vec![
            Schema::string(),
            Schema::number(),
            Schema::boolean(),
            Schema::exact(5),
            Schema::object().field("a", Schema::string()).into(),
            Schema::array(Schema::boolean()),
            Schema::class("Any", |_| true),
            Schema::optional(Schema::number()),
        ];

        for node in &nodes {
            // Total: no node kind panics or fails to resolve.
            let _ = resolve(node);
        }
    }
}
