//! Exact-literal matcher.

use serde_json::Value;

use crate::error::ConvertError;

use super::primitive::numeric_value;
use super::Matcher;

/// Matches exactly one literal token.
///
/// Strict matching is type-and-value equality; loose matching additionally
/// accepts cross-type numeric equality (`5` vs `"5"`, `true` vs `1`) and
/// treats the absent sentinel as loosely equal to null. Conversion ignores
/// the candidate and always yields the stored token: the "value" of an exact
/// schema is the literal itself, so callers guard entry with the match
/// operations.
///
/// Strict equality inherits [`serde_json::Number`] equality, which keeps
/// integer and float spellings distinct: an integer token `5` strictly
/// rejects a candidate parsed from `"5.0"`. Loose matching bridges the two
/// through numeric coercion.
pub struct ExactMatcher {
    token: Value,
}

impl ExactMatcher {
    /// Builds a matcher for the given literal token.
    pub fn new(token: Value) -> Self {
        Self { token }
    }
}

impl Matcher for ExactMatcher {
    fn match_loose(&self, value: Option<&Value>) -> bool {
        match value {
            Some(v) => loose_eq(&self.token, v),
            None => self.token.is_null(),
        }
    }

    fn matches(&self, value: Option<&Value>) -> bool {
        value == Some(&self.token)
    }

    fn convert(&self, _value: Option<&Value>) -> Result<Option<Value>, ConvertError> {
        Ok(Some(self.token.clone()))
    }
}

/// Value-coercing equality between a literal token and a candidate.
///
/// Strictly equal values are loosely equal. Two strings compare as strings,
/// never as numbers. Otherwise both sides are run through numeric coercion
/// and compared as numbers; null is loosely equal only to null.
fn loose_eq(token: &Value, candidate: &Value) -> bool {
    if token == candidate {
        return true;
    }
    if token.is_string() && candidate.is_string() {
        return false;
    }
    if token.is_null() || candidate.is_null() {
        return false;
    }
    match (numeric_value(token), numeric_value(candidate)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strict_equality() {
        let m = ExactMatcher::new(json!(5));
        assert!(m.matches(Some(&json!(5))));
        assert!(!m.matches(Some(&json!("5"))));
        assert!(!m.matches(Some(&json!(6))));
        assert!(!m.matches(None));
    }

    #[test]
    fn test_loose_numeric_equality() {
        let m = ExactMatcher::new(json!(5));
        assert!(m.match_loose(Some(&json!("5"))));
        assert!(m.match_loose(Some(&json!(5.0))));
        assert!(!m.match_loose(Some(&json!("6"))));
    }

    #[test]
    fn test_loose_bool_coercion() {
        let m = ExactMatcher::new(json!(true));
        assert!(m.match_loose(Some(&json!(true))));
        assert!(m.match_loose(Some(&json!(1))));
        assert!(m.match_loose(Some(&json!("1"))));
        // Coercion goes through numbers, so "true" does not equal true.
        assert!(!m.match_loose(Some(&json!("true"))));
    }

    #[test]
    fn test_string_token() {
        let m = ExactMatcher::new(json!("admin"));
        assert!(m.matches(Some(&json!("admin"))));
        assert!(!m.matches(Some(&json!("user"))));
        assert!(!m.match_loose(Some(&json!("user"))));
    }

    #[test]
    fn test_numeric_string_token_compares_as_string() {
        // Two strings compare as strings even when both spell a number.
        let m = ExactMatcher::new(json!("5"));
        assert!(m.match_loose(Some(&json!("5"))));
        assert!(!m.match_loose(Some(&json!("5.0"))));
        assert!(!m.match_loose(Some(&json!("05"))));
        // A numeric candidate still coerces against a string token.
        assert!(m.match_loose(Some(&json!(5))));
        assert!(m.match_loose(Some(&json!(5.0))));
    }

    #[test]
    fn test_null_token_loosely_accepts_absent() {
        let m = ExactMatcher::new(json!(null));
        assert!(m.matches(Some(&json!(null))));
        assert!(m.match_loose(None));
        assert!(!m.matches(None));
        assert!(!m.match_loose(Some(&json!(0))));
    }

    #[test]
    fn test_convert_is_constant_projection() {
        let m = ExactMatcher::new(json!(5));
        assert_eq!(m.convert(Some(&json!("anything"))).unwrap(), Some(json!(5)));
        assert_eq!(m.convert(None).unwrap(), Some(json!(5)));
    }
}
