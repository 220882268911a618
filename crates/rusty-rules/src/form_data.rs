// File: src/form_data.rs
// Purpose: Ordered field-name → value mapping handed to batch validation

use crate::value::{FieldValue, ValueSource};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::borrow::Cow;

/// Submitted form values, in submission order
///
/// Values are kept exactly as submitted: no trimming, so `"  "` satisfies
/// `required` the same way it does in the browser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    fields: IndexMap<String, FieldValue>,
}

impl FormData {
    /// Create empty form data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from form fields
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        fields.into_iter().collect()
    }

    /// Create from a JSON object
    ///
    /// Scalars keep their type; nested arrays and objects are stored as their
    /// JSON text. Anything other than an object yields empty form data.
    pub fn from_json(json: &JsonValue) -> Self {
        let JsonValue::Object(map) = json else {
            return Self::new();
        };

        map.iter()
            .map(|(key, value)| {
                let value = match value {
                    JsonValue::Null => FieldValue::Null,
                    JsonValue::Bool(b) => FieldValue::Bool(*b),
                    JsonValue::Number(n) => n
                        .as_f64()
                        .map_or_else(|| FieldValue::Text(n.to_string()), FieldValue::Number),
                    JsonValue::String(s) => FieldValue::Text(s.clone()),
                    other => FieldValue::Text(other.to_string()),
                };
                (key.clone(), value)
            })
            .collect()
    }

    /// Set a field, replacing any previous value in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Get a form field value
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Check if a field exists
    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Get all field names
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if form is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormData {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<FieldValue>> Extend<(K, V)> for FormData {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl ValueSource for FormData {
    fn value_of(&self, field: &str) -> Option<Cow<'_, str>> {
        self.fields.get(field).map(FieldValue::as_text)
    }
}
