//! Class (type-identity) matcher.

use serde_json::Value;

use crate::error::ConvertError;
use crate::schema::ClassTag;

use super::Matcher;

/// Matches values accepted by a [`ClassTag`] probe.
///
/// Both match operations are the probe itself; there is no looser form of a
/// type-identity check. Conversion returns the value unchanged when the probe
/// accepts it and fails with a mismatch naming the class when it does not.
pub struct ClassMatcher {
    tag: ClassTag,
}

impl ClassMatcher {
    /// Builds a matcher for the given tag.
    pub fn new(tag: ClassTag) -> Self {
        Self { tag }
    }
}

impl Matcher for ClassMatcher {
    fn match_loose(&self, value: Option<&Value>) -> bool {
        value.is_some_and(|v| self.tag.is_instance(v))
    }

    fn matches(&self, value: Option<&Value>) -> bool {
        value.is_some_and(|v| self.tag.is_instance(v))
    }

    fn convert(&self, value: Option<&Value>) -> Result<Option<Value>, ConvertError> {
        match value {
            Some(v) if self.tag.is_instance(v) => Ok(Some(v.clone())),
            _ => Err(ConvertError::mismatch(
                value,
                format!("instance of {}", self.tag.name()),
            )),
        }
    }
}
