//! Object matcher.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::ConvertError;
use crate::schema::ObjectShape;

use super::{resolve, Matcher};

/// Matches objects property-by-property against a declared shape.
///
/// Matching is a structural subset check: every declared property must
/// satisfy its sub-matcher (missing properties are checked as the absent
/// sentinel), and undeclared input properties are never inspected.
/// Conversion projects the input down to exactly the declared properties.
///
/// Sub-matchers are resolved once at construction, not on each call.
pub struct ObjectMatcher {
    fields: Vec<(String, Arc<dyn Matcher>)>,
}

impl ObjectMatcher {
    /// Builds a matcher for the given shape, resolving every declared
    /// property's schema eagerly.
    pub fn new(shape: &ObjectShape) -> Self {
        Self {
            fields: shape
                .iter()
                .map(|(name, node)| (name.to_string(), resolve(node)))
                .collect(),
        }
    }

    fn check(&self, value: Option<&Value>, strict: bool) -> bool {
        let Some(Value::Object(obj)) = value else {
            return false;
        };

        // Fail fast on the first failing property.
        self.fields.iter().all(|(name, sub)| {
            let field = obj.get(name);
            if strict {
                sub.matches(field)
            } else {
                sub.match_loose(field)
            }
        })
    }
}

impl Matcher for ObjectMatcher {
    fn match_loose(&self, value: Option<&Value>) -> bool {
        self.check(value, false)
    }

    fn matches(&self, value: Option<&Value>) -> bool {
        self.check(value, true)
    }

    fn convert(&self, value: Option<&Value>) -> Result<Option<Value>, ConvertError> {
        let Some(Value::Object(obj)) = value else {
            return Err(ConvertError::mismatch(value, "object"));
        };

        let mut converted = Map::new();
        for (name, sub) in &self.fields {
            match sub.convert(obj.get(name)) {
                // An accepted absent property (an optional the input omits)
                // stays absent in the output.
                Ok(Some(v)) => {
                    converted.insert(name.clone(), v);
                }
                Ok(None) => {}
                Err(err) => return Err(ConvertError::property(name, err)),
            }
        }

        Ok(Some(Value::Object(converted)))
    }
}
