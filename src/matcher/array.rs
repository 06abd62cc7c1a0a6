//! Array matcher.

use std::sync::Arc;

use serde_json::Value;

use crate::error::ConvertError;

use super::Matcher;

/// Matches homogeneous arrays against a single element matcher.
///
/// Empty arrays always pass the match operations. Per-element conversion
/// failures are wrapped with the offending index.
pub struct ArrayMatcher {
    element: Arc<dyn Matcher>,
}

impl ArrayMatcher {
    /// Builds a matcher over the given element matcher.
    pub fn new(element: Arc<dyn Matcher>) -> Self {
        Self { element }
    }
}

impl Matcher for ArrayMatcher {
    fn match_loose(&self, value: Option<&Value>) -> bool {
        match value {
            Some(Value::Array(items)) => items.iter().all(|v| self.element.match_loose(Some(v))),
            _ => false,
        }
    }

    fn matches(&self, value: Option<&Value>) -> bool {
        match value {
            Some(Value::Array(items)) => items.iter().all(|v| self.element.matches(Some(v))),
            _ => false,
        }
    }

    fn convert(&self, value: Option<&Value>) -> Result<Option<Value>, ConvertError> {
        let Some(Value::Array(items)) = value else {
            return Err(ConvertError::mismatch(value, "array"));
        };

        let converted = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                self.element
                    .convert(Some(item))
                    .map(|v| v.unwrap_or(Value::Null))
                    .map_err(|err| ConvertError::element(i, err))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Value::Array(converted)))
    }
}
