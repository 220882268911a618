// File: src/outcome.rs
// Purpose: Validation results: per-field error maps and the overall outcome

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Rule name → resolved message for one field, in evaluation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed rule; a repeated rule name keeps its position and
    /// takes the newer message
    pub fn insert(&mut self, rule: impl Into<String>, message: impl Into<String>) {
        self.0.insert(rule.into(), message.into());
    }

    pub fn get(&self, rule: &str) -> Option<&str> {
        self.0.get(rule).map(String::as_str)
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.0.contains_key(rule)
    }

    /// First message recorded
    pub fn first(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }

    pub fn rules(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(rule, msg)| (rule.as_str(), msg.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as `<ul><li>message</li>...</ul>`
    ///
    /// Messages are inserted as-is, not HTML-escaped.
    pub fn to_html_list(&self) -> String {
        let mut html = String::from("<ul>");
        push_items(&mut html, self.messages());
        html.push_str("</ul>");
        html
    }
}

/// Field name → that field's errors. Only failing fields appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(IndexMap<String, FieldErrors>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a field's errors; an empty set is not stored
    pub fn insert(&mut self, field: impl Into<String>, errors: FieldErrors) {
        if !errors.is_empty() {
            self.0.insert(field.into(), errors);
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldErrors> {
        self.0.get(field)
    }

    /// Message for one field and rule
    pub fn message(&self, field: &str, rule: &str) -> Option<&str> {
        self.get(field).and_then(|errors| errors.get(rule))
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldErrors)> {
        self.0.iter().map(|(field, errors)| (field.as_str(), errors))
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every message of every field in one `<ul>`
    pub fn to_html_list(&self) -> String {
        let mut html = String::from("<ul>");
        push_items(&mut html, self.0.values().flat_map(FieldErrors::messages));
        html.push_str("</ul>");
        html
    }
}

fn push_items<'a>(html: &mut String, messages: impl Iterator<Item = &'a str>) {
    for message in messages {
        html.push_str("<li>");
        html.push_str(message);
        html.push_str("</li>");
    }
}

/// Result of validating a set of fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: ErrorMap,
}

impl ValidationOutcome {
    /// Build from collected errors; valid exactly when there are none
    pub fn from_errors(errors: ErrorMap) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get first error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).and_then(FieldErrors::first)
    }

    /// Get all errors for a specific field
    pub fn get_errors(&self, field: &str) -> Option<&FieldErrors> {
        self.errors.get(field)
    }

    pub fn to_html_list(&self) -> String {
        self.errors.to_html_list()
    }
}

/// Terminal state of one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    /// Every evaluated rule passed, or `permit_empty` exempted an empty value
    Passed,
    /// Empty and not required by its `required_with`/`required_without` gate
    SkippedEmpty,
    /// At least one rule failed
    Failed,
}

/// Result of validating one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    pub state: FieldState,
    pub errors: FieldErrors,
}

impl FieldOutcome {
    pub fn passed() -> Self {
        Self {
            state: FieldState::Passed,
            errors: FieldErrors::new(),
        }
    }

    pub fn skipped() -> Self {
        Self {
            state: FieldState::SkippedEmpty,
            errors: FieldErrors::new(),
        }
    }

    /// Failed when `errors` is non-empty, passed otherwise
    pub fn from_errors(errors: FieldErrors) -> Self {
        let state = if errors.is_empty() {
            FieldState::Passed
        } else {
            FieldState::Failed
        };
        Self { state, errors }
    }

    /// Skipped fields count as valid
    pub fn is_valid(&self) -> bool {
        self.state != FieldState::Failed
    }
}
