//! Named matcher storage and reference resolution.
//!
//! This module provides [`MatcherRegistry`], which stores resolved matchers
//! under string names and hands out reference nodes that look the name up at
//! call time. References enable matcher reuse and self-referential or
//! mutually recursive schemas.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use serde_json::Value;

use crate::error::ConvertError;
use crate::matcher::{resolve, Matcher};
use crate::schema::SchemaNode;

/// Type alias for the matcher storage map.
type MatcherMap = Arc<RwLock<HashMap<String, Arc<dyn Matcher>>>>;

/// A thread-safe registry of named matchers.
///
/// Registration resolves the schema once and stores the matcher; references
/// created with [`reference`](Self::reference) resolve lazily at call time,
/// so a schema may reference itself (or a name registered later).
///
/// Cloning a registry shares the underlying storage. Multiple threads may
/// match concurrently; registration takes the write lock.
///
/// # Example
///
/// ```rust
/// use remold::{MatcherRegistry, Schema};
/// use serde_json::json;
///
/// let registry = MatcherRegistry::new();
/// registry.register(
///     "Comment",
///     Schema::object()
///         .field("text", Schema::string())
///         .field("replies", Schema::optional(Schema::array(registry.reference("Comment")))),
/// ).unwrap();
///
/// let value = registry.convert("Comment", &json!({
///     "text": "hi",
///     "replies": [{"text": "reply"}]
/// })).unwrap();
/// assert_eq!(value["replies"][0]["text"], json!("reply"));
/// ```
///
/// No recursion-depth limit is enforced; see the crate docs for the caller
/// responsibility around unbounded input depth.
pub struct MatcherRegistry {
    matchers: MatcherMap,
}

impl MatcherRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            matchers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Resolves `schema` and stores the matcher under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if the name is already taken.
    pub fn register(
        &self,
        name: impl Into<String>,
        schema: impl Into<SchemaNode>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut matchers = self.matchers.write();

        if matchers.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        matchers.insert(name, resolve(&schema.into()));
        Ok(())
    }

    /// Retrieves a registered matcher by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Matcher>> {
        self.matchers.read().get(name).cloned()
    }

    /// Returns a schema node referring to `name`, resolved at call time.
    ///
    /// The reference holds a weak handle to this registry's storage, so it
    /// does not keep the registry alive. Matching through an unresolvable
    /// reference returns `false`; converting fails with
    /// [`ConvertError::UnresolvedReference`].
    pub fn reference(&self, name: impl Into<String>) -> SchemaNode {
        SchemaNode::Resolved(Arc::new(RefMatcher {
            name: name.into(),
            matchers: Arc::downgrade(&self.matchers),
        }))
    }

    /// Strict-matches `value` against the named matcher.
    pub fn matches(&self, name: &str, value: &Value) -> Result<bool, RegistryError> {
        let matcher = self
            .get(name)
            .ok_or_else(|| RegistryError::MatcherNotFound(name.to_string()))?;
        Ok(matcher.matches(Some(value)))
    }

    /// Loose-matches `value` against the named matcher.
    pub fn loose_matches(&self, name: &str, value: &Value) -> Result<bool, RegistryError> {
        let matcher = self
            .get(name)
            .ok_or_else(|| RegistryError::MatcherNotFound(name.to_string()))?;
        Ok(matcher.match_loose(Some(value)))
    }

    /// Converts `value` through the named matcher.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MatcherNotFound`] for an unknown name and
    /// [`RegistryError::Conversion`] when conversion fails.
    pub fn convert(&self, name: &str, value: &Value) -> Result<Value, RegistryError> {
        let matcher = self
            .get(name)
            .ok_or_else(|| RegistryError::MatcherNotFound(name.to_string()))?;
        let converted = matcher.convert(Some(value))?;
        Ok(converted.unwrap_or(Value::Null))
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MatcherRegistry {
    fn clone(&self) -> Self {
        Self {
            matchers: Arc::clone(&self.matchers),
        }
    }
}

/// A matcher that looks its target up by name at call time.
struct RefMatcher {
    name: String,
    matchers: Weak<RwLock<HashMap<String, Arc<dyn Matcher>>>>,
}

impl RefMatcher {
    fn target(&self) -> Option<Arc<dyn Matcher>> {
        self.matchers
            .upgrade()
            .and_then(|map| map.read().get(&self.name).cloned())
    }
}

impl Matcher for RefMatcher {
    fn match_loose(&self, value: Option<&Value>) -> bool {
        self.target().is_some_and(|m| m.match_loose(value))
    }

    fn matches(&self, value: Option<&Value>) -> bool {
        self.target().is_some_and(|m| m.matches(value))
    }

    fn convert(&self, value: Option<&Value>) -> Result<Option<Value>, ConvertError> {
        match self.target() {
            Some(m) => m.convert(value),
            None => Err(ConvertError::UnresolvedReference {
                name: self.name.clone(),
            }),
        }
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a matcher under a name that already exists.
    #[error("matcher '{0}' already registered")]
    DuplicateName(String),

    /// No matcher is registered under the requested name.
    #[error("matcher '{0}' not found")]
    MatcherNotFound(String),

    /// Conversion through a registered matcher failed.
    #[error(transparent)]
    Conversion(#[from] ConvertError),
}
