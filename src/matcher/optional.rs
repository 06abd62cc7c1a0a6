//! Optional matcher.

use std::sync::Arc;

use serde_json::Value;

use crate::error::ConvertError;

use super::Matcher;

/// Accepts the absent sentinel, delegating any present value to an inner
/// matcher.
///
/// Only absence is special-cased: a present `null` goes to the inner matcher
/// like any other value.
pub struct OptionalMatcher {
    inner: Arc<dyn Matcher>,
}

impl OptionalMatcher {
    /// Wraps an already-resolved inner matcher.
    pub fn new(inner: Arc<dyn Matcher>) -> Self {
        Self { inner }
    }
}

impl Matcher for OptionalMatcher {
    fn match_loose(&self, value: Option<&Value>) -> bool {
        value.is_none() || self.inner.match_loose(value)
    }

    fn matches(&self, value: Option<&Value>) -> bool {
        value.is_none() || self.inner.matches(value)
    }

    fn convert(&self, value: Option<&Value>) -> Result<Option<Value>, ConvertError> {
        match value {
            None => Ok(None),
            some => self.inner.convert(some),
        }
    }
}
