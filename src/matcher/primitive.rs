//! Primitive matchers for strings, numbers, and booleans.
//!
//! Loose matching follows the coercion policy of each target type; strict
//! matching requires the exact runtime type; conversion applies the same
//! coercion as the loose check and fails with a [`ConvertError::TypeMismatch`]
//! naming the source value and target type.

use serde_json::{Number, Value};

use crate::error::ConvertError;

use super::Matcher;

/// Matches string values; loosely accepts anything stringifiable.
pub struct StringMatcher;

impl Matcher for StringMatcher {
    /// Any present, non-null value is stringifiable.
    fn match_loose(&self, value: Option<&Value>) -> bool {
        matches!(value, Some(v) if !v.is_null())
    }

    fn matches(&self, value: Option<&Value>) -> bool {
        matches!(value, Some(Value::String(_)))
    }

    fn convert(&self, value: Option<&Value>) -> Result<Option<Value>, ConvertError> {
        let text = match value {
            None | Some(Value::Null) => return Err(ConvertError::mismatch(value, "string")),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Number(n)) => n.to_string(),
            // Composites render as their JSON text.
            Some(other) => other.to_string(),
        };
        Ok(Some(Value::String(text)))
    }
}

/// Matches boolean values; loosely accepts `"true"` and `"false"` too.
pub struct BooleanMatcher;

impl Matcher for BooleanMatcher {
    fn match_loose(&self, value: Option<&Value>) -> bool {
        match value {
            Some(Value::Bool(_)) => true,
            Some(Value::String(s)) => s == "true" || s == "false",
            _ => false,
        }
    }

    fn matches(&self, value: Option<&Value>) -> bool {
        matches!(value, Some(Value::Bool(_)))
    }

    fn convert(&self, value: Option<&Value>) -> Result<Option<Value>, ConvertError> {
        match value {
            Some(Value::Bool(b)) => Ok(Some(Value::Bool(*b))),
            Some(Value::String(s)) if s == "true" => Ok(Some(Value::Bool(true))),
            Some(Value::String(s)) if s == "false" => Ok(Some(Value::Bool(false))),
            _ => Err(ConvertError::mismatch(value, "boolean")),
        }
    }
}

/// Matches numeric values; loosely accepts anything numerically coercible.
pub struct NumberMatcher;

impl Matcher for NumberMatcher {
    fn match_loose(&self, value: Option<&Value>) -> bool {
        value.is_some_and(|v| numeric_value(v).is_some())
    }

    fn matches(&self, value: Option<&Value>) -> bool {
        matches!(value, Some(Value::Number(_)))
    }

    fn convert(&self, value: Option<&Value>) -> Result<Option<Value>, ConvertError> {
        match value {
            // Identity on exact type match: the original number is returned
            // unchanged, not re-parsed.
            Some(v @ Value::Number(_)) => Ok(Some(v.clone())),
            Some(Value::Bool(b)) => Ok(Some(Value::Number(Number::from(u8::from(*b))))),
            Some(Value::String(s)) => parse_number(s.trim())
                .map(|n| Some(Value::Number(n)))
                .ok_or_else(|| ConvertError::mismatch(value, "number")),
            _ => Err(ConvertError::mismatch(value, "number")),
        }
    }
}

/// Parses numeric text, preserving integral values as integers.
fn parse_number(text: &str) -> Option<Number> {
    if let Ok(i) = text.parse::<i64>() {
        return Some(Number::from(i));
    }
    if let Ok(u) = text.parse::<u64>() {
        return Some(Number::from(u));
    }
    // from_f64 rejects NaN and infinities.
    text.parse::<f64>().ok().and_then(Number::from_f64)
}

/// The numeric coercion shared by the number matcher and loose equality.
///
/// Numbers coerce to themselves, numeric strings to their parse, booleans to
/// 1/0. Null, absent values, arrays, and objects are not coercible.
pub(crate) fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        // JSON numbers are always finite, so coerced strings must be too.
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_matches_only_strings() {
        let m = StringMatcher;
        assert!(m.matches(Some(&json!("hello"))));
        assert!(!m.matches(Some(&json!(42))));
        assert!(!m.matches(Some(&json!(null))));
        assert!(!m.matches(None));
    }

    #[test]
    fn test_string_loose_rejects_only_nullish() {
        let m = StringMatcher;
        assert!(m.match_loose(Some(&json!(42))));
        assert!(m.match_loose(Some(&json!(true))));
        assert!(m.match_loose(Some(&json!([1]))));
        assert!(!m.match_loose(Some(&json!(null))));
        assert!(!m.match_loose(None));
    }

    #[test]
    fn test_string_convert_stringifies() {
        let m = StringMatcher;
        assert_eq!(m.convert(Some(&json!(42))).unwrap(), Some(json!("42")));
        assert_eq!(m.convert(Some(&json!(false))).unwrap(), Some(json!("false")));
        assert_eq!(m.convert(Some(&json!("x"))).unwrap(), Some(json!("x")));
    }

    #[test]
    fn test_string_convert_rejects_null_and_absent() {
        let m = StringMatcher;
        assert!(m.convert(Some(&json!(null))).is_err());
        let err = m.convert(None).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert nothing to string");
    }

    #[test]
    fn test_boolean_loose_accepts_bool_strings() {
        let m = BooleanMatcher;
        assert!(m.match_loose(Some(&json!(true))));
        assert!(m.match_loose(Some(&json!("true"))));
        assert!(m.match_loose(Some(&json!("false"))));
        assert!(!m.match_loose(Some(&json!("yes"))));
        assert!(!m.match_loose(Some(&json!(1))));
        assert!(!m.match_loose(None));
    }

    #[test]
    fn test_boolean_strict() {
        let m = BooleanMatcher;
        assert!(m.matches(Some(&json!(false))));
        assert!(!m.matches(Some(&json!("false"))));
    }

    #[test]
    fn test_boolean_convert() {
        let m = BooleanMatcher;
        assert_eq!(m.convert(Some(&json!("false"))).unwrap(), Some(json!(false)));
        assert_eq!(m.convert(Some(&json!(true))).unwrap(), Some(json!(true)));
        assert!(m.convert(Some(&json!("1"))).is_err());
    }

    #[test]
    fn test_number_loose_coercion() {
        let m = NumberMatcher;
        assert!(m.match_loose(Some(&json!(1.5))));
        assert!(m.match_loose(Some(&json!("42"))));
        assert!(m.match_loose(Some(&json!(" 42 "))));
        assert!(m.match_loose(Some(&json!(true))));
        assert!(!m.match_loose(Some(&json!("x"))));
        assert!(!m.match_loose(Some(&json!(null))));
        assert!(!m.match_loose(Some(&json!([1]))));
        assert!(!m.match_loose(None));
    }

    #[test]
    fn test_number_strict() {
        let m = NumberMatcher;
        assert!(m.matches(Some(&json!(42))));
        assert!(!m.matches(Some(&json!("42"))));
    }

    #[test]
    fn test_number_convert_preserves_integers() {
        let m = NumberMatcher;
        assert_eq!(m.convert(Some(&json!("42"))).unwrap(), Some(json!(42)));
        assert_eq!(m.convert(Some(&json!("2.5"))).unwrap(), Some(json!(2.5)));
        assert_eq!(m.convert(Some(&json!(7))).unwrap(), Some(json!(7)));
        assert_eq!(m.convert(Some(&json!(true))).unwrap(), Some(json!(1)));
    }

    #[test]
    fn test_number_convert_rejects_non_numeric() {
        let m = NumberMatcher;
        let err = m.convert(Some(&json!("x"))).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert \"x\" to number");
        assert!(m.convert(Some(&json!(null))).is_err());
    }

    #[test]
    fn test_identity_when_strict_match_passes() {
        // For every primitive: matches(v) implies convert(v) == v.
        let cases: Vec<(Box<dyn Matcher>, Value)> = vec![
            (Box::new(StringMatcher), json!("hello")),
            (Box::new(NumberMatcher), json!(3.25)),
            (Box::new(BooleanMatcher), json!(true)),
        ];
        for (matcher, value) in cases {
            assert!(matcher.matches(Some(&value)));
            assert_eq!(matcher.convert(Some(&value)).unwrap(), Some(value));
        }
    }
}
