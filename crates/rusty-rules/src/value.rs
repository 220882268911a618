// File: src/value.rs
// Purpose: Field value types and the value-source abstraction used for cross-field rules

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// 2^53; past this, whole floats render through `f64` formatting
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single submitted field value
///
/// Rules always see the text form of a value (see [`FieldValue::as_text`]),
/// so `24` and `"24"` validate identically.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Convert value to the string rules are evaluated against
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Null => Cow::Borrowed(""),
            FieldValue::Bool(b) => Cow::Owned(b.to_string()),
            FieldValue::Number(n) => {
                // Integers print without `.0` while exactly representable
                if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
                    Cow::Owned(format!("{}", *n as i64))
                } else {
                    Cow::Owned(n.to_string())
                }
            }
            FieldValue::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Null and the empty string are empty
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Bool(_) | FieldValue::Number(_) => false,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Read access to the named values of a form, used by cross-field rules
/// (`matches`, `differs`, `required_with`, `required_without`)
///
/// An absent field is `None`; rules treat it as empty rather than as an error.
pub trait ValueSource {
    fn value_of(&self, field: &str) -> Option<Cow<'_, str>>;
}

/// A value source with no fields, used for single-value validation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoValues;

impl ValueSource for NoValues {
    fn value_of(&self, _field: &str) -> Option<Cow<'_, str>> {
        None
    }
}

impl ValueSource for HashMap<String, String> {
    fn value_of(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl ValueSource for BTreeMap<String, String> {
    fn value_of(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl ValueSource for IndexMap<String, String> {
    fn value_of(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl ValueSource for IndexMap<String, FieldValue> {
    fn value_of(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).map(FieldValue::as_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        assert_eq!(FieldValue::from(24).as_text(), "24");
        assert_eq!(FieldValue::from(2.5).as_text(), "2.5");
        assert_eq!(FieldValue::from(true).as_text(), "true");
        assert_eq!(FieldValue::Null.as_text(), "");
        assert_eq!(FieldValue::from("Jo").as_text(), "Jo");
    }

    #[test]
    fn test_large_numbers_keep_their_digits() {
        assert_eq!(FieldValue::from(1e20).as_text(), "100000000000000000000");
        assert_eq!(FieldValue::from(-1e20).as_text(), "-100000000000000000000");
        assert_eq!(FieldValue::from(9_007_199_254_740_991_i64).as_text(), "9007199254740991");
    }

    #[test]
    fn test_is_empty() {
        assert!(FieldValue::Null.is_empty());
        assert!(FieldValue::from("").is_empty());
        assert!(!FieldValue::from(0).is_empty());
        assert!(!FieldValue::from(" ").is_empty());
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<FieldValue> = serde_json::from_str(r#"[null, true, 17, "x"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::Null,
                FieldValue::Bool(true),
                FieldValue::Number(17.0),
                FieldValue::Text("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_map_sources() {
        let mut map = HashMap::new();
        map.insert("password".to_string(), "x".to_string());
        assert_eq!(map.value_of("password").as_deref(), Some("x"));
        assert_eq!(map.value_of("missing"), None);
        assert_eq!(NoValues.value_of("anything"), None);
    }
}
