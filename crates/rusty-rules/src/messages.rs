// File: src/messages.rs
// Purpose: Error message templates and placeholder substitution
//
// Lookup order for a failed rule: the caller's template for that field and
// rule, then the built-in template for the rule, then FALLBACK_TEMPLATE.
// Templates may use `{field}`, `{value}` and `{param}`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Used when neither an override nor a built-in template exists
pub const FALLBACK_TEMPLATE: &str = "Please enter a valid: {field}";

/// Rule name → template, for one field
pub type RuleMessages = IndexMap<String, String>;

/// Field name → rule name → template
pub type MessageOverrides = IndexMap<String, RuleMessages>;

/// How many occurrences of each placeholder get replaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionMode {
    /// Only the first `{field}`, `{value}` and `{param}`
    #[default]
    FirstOccurrence,
    /// Every occurrence
    All,
}

/// Built-in template for a rule name
pub fn default_template(rule: &str) -> Option<&'static str> {
    let template = match rule {
        "alpha" => "The {field} field may only contain alphabetical characters.",
        "alpha_dash" => "The {field} field may only contain alphanumeric, underscore, and dash characters.",
        "alpha_numeric" => "The {field} field may only contain alphanumeric characters.",
        "alpha_numeric_punct" => "The {field} field may contain only alphanumeric characters, spaces, and  ~ ! # $ % & * - _ + = | : . characters.",
        "alpha_numeric_space" => "The {field} field may only contain alphanumeric and space characters.",
        "alpha_space" => "The {field} field may only contain alphabetical characters and spaces.",
        "decimal" => "The {field} field must contain a decimal number.",
        "differs" => "The {field} field must differ from the {param} field.",
        "equals" => "The {field} field must be exactly: {param}.",
        "exact_length" => "The {field} field must be exactly {param} characters in length.",
        "greater_than" => "The {field} field must contain a number greater than {param}.",
        "greater_than_equal_to" => "The {field} field must contain a number greater than or equal to {param}.",
        "hex" => "The {field} field may only contain hexadecimal characters.",
        "in_list" => "The {field} field must be one of: {param}.",
        "integer" => "The {field} field must contain an integer.",
        "is_natural" => "The {field} field must only contain digits.",
        "is_natural_no_zero" => "The {field} field must only contain digits and must be greater than zero.",
        "less_than" => "The {field} field must contain a number less than {param}.",
        "less_than_equal_to" => "The {field} field must contain a number less than or equal to {param}.",
        "matches" => "The {field} field does not match the {param} field.",
        "max_length" => "The {field} field cannot exceed {param} characters in length.",
        "min_length" => "The {field} field must be at least {param} characters in length.",
        "not_equals" => "The {field} field cannot be: {param}.",
        "not_in_list" => "The {field} field must not be one of: {param}.",
        "numeric" => "The {field} field must contain only numbers.",
        "regex_match" => "The {field} field is not in the correct format.",
        "required" => "The {field} field is required.",
        "required_with" => "The {field} field is required when {param} is present.",
        "required_without" => "The {field} field is required when {param} is not present.",
        "valid_email" => "The {field} field must contain a valid email address.",
        "valid_ip" => "The {field} field must contain a valid IP.",
        "valid_url" => "The {field} field must contain a valid URL.",
        "valid_date" => "The {field} field must contain a valid date.",
        _ => return None,
    };
    Some(template)
}

/// Replace placeholders in `template`
///
/// `{param}` is only replaced when the rule has a parameter.
///
/// # Examples
///
/// ```
/// use rusty_rules::{substitute, SubstitutionMode};
///
/// let msg = substitute(
///     "You are only {value}. Minimum age requirement is {param}",
///     "age",
///     "17",
///     Some("18"),
///     SubstitutionMode::FirstOccurrence,
/// );
/// assert_eq!(msg, "You are only 17. Minimum age requirement is 18");
/// ```
pub fn substitute(
    template: &str,
    field: &str,
    value: &str,
    param: Option<&str>,
    mode: SubstitutionMode,
) -> String {
    let replace = |text: String, placeholder: &str, with: &str| match mode {
        SubstitutionMode::FirstOccurrence => text.replacen(placeholder, with, 1),
        SubstitutionMode::All => text.replace(placeholder, with),
    };

    let message = replace(template.to_string(), "{field}", field);
    let message = replace(message, "{value}", value);
    match param {
        Some(param) => replace(message, "{param}", param),
        None => message,
    }
}

/// Message lookup for one validation pass
#[derive(Debug, Clone, Copy)]
pub struct MessageCatalog<'a> {
    overrides: &'a MessageOverrides,
    mode: SubstitutionMode,
}

impl<'a> MessageCatalog<'a> {
    pub fn new(overrides: &'a MessageOverrides, mode: SubstitutionMode) -> Self {
        Self { overrides, mode }
    }

    /// The unsubstituted template for `field`/`rule`
    pub fn template_for(&self, field: &str, rule: &str) -> &'a str {
        self.overrides
            .get(field)
            .and_then(|messages| messages.get(rule))
            .map(String::as_str)
            .or_else(|| default_template(rule))
            .unwrap_or(FALLBACK_TEMPLATE)
    }

    /// The final message for a failed rule
    pub fn resolve(&self, field: &str, rule: &str, param: Option<&str>, value: &str) -> String {
        substitute(self.template_for(field, rule), field, value, param, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn overrides() -> MessageOverrides {
        let mut age = RuleMessages::new();
        age.insert(
            "greater_than_equal_to".to_string(),
            "You are only {value}. Minimum age requirement is {param}".to_string(),
        );
        let mut all = MessageOverrides::new();
        all.insert("age".to_string(), age);
        all
    }

    #[test]
    fn test_override_wins() {
        let overrides = overrides();
        let catalog = MessageCatalog::new(&overrides, SubstitutionMode::default());
        assert_eq!(
            catalog.resolve("age", "greater_than_equal_to", Some("18"), "17"),
            "You are only 17. Minimum age requirement is 18"
        );
    }

    #[test]
    fn test_default_then_fallback() {
        let overrides = overrides();
        let catalog = MessageCatalog::new(&overrides, SubstitutionMode::default());
        assert_eq!(
            catalog.resolve("name", "min_length", Some("5"), "Jo"),
            "The name field must be at least 5 characters in length."
        );
        assert_eq!(
            catalog.resolve("age", "even", None, "17"),
            "Please enter a valid: age"
        );
    }

    #[test]
    fn test_first_occurrence_only() {
        let message = substitute(
            "{field} {field} {param} {param}",
            "x",
            "",
            Some("1"),
            SubstitutionMode::FirstOccurrence,
        );
        assert_eq!(message, "x {field} 1 {param}");
    }

    #[test]
    fn test_replace_all() {
        let message = substitute("{field} {field}", "x", "", None, SubstitutionMode::All);
        assert_eq!(message, "x x");
    }

    #[test]
    fn test_param_left_when_absent() {
        let message = substitute("{field}: {param}", "x", "", None, SubstitutionMode::All);
        assert_eq!(message, "x: {param}");
    }

    #[test]
    fn test_field_substituted_before_value() {
        let message = substitute("{field} is {value}", "{value}", "bad", None, SubstitutionMode::FirstOccurrence);
        assert_eq!(message, "bad is {value}");
    }
}
