//! Runtime type-identity tags.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// A named runtime type-identity probe.
///
/// `ClassTag` is the schema-side representation of an "instance of" check.
/// Candidate values are untyped, so type identity is expressed as a
/// predicate over the value plus a name used in diagnostics.
#[derive(Clone)]
pub struct ClassTag {
    name: String,
    probe: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl ClassTag {
    /// Creates a tag with the given diagnostic name and membership probe.
    pub fn new<F>(name: impl Into<String>, probe: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            probe: Arc::new(probe),
        }
    }

    /// Returns the diagnostic name of this tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if `value` is an instance of this tag.
    pub fn is_instance(&self, value: &Value) -> bool {
        (self.probe)(value)
    }
}

impl fmt::Debug for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassTag").field("name", &self.name).finish()
    }
}
