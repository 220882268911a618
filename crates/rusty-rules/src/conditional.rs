// File: src/conditional.rs
// Purpose: permit_empty / required_with / required_without handling
//
// These three rules are markers. The validator consults them before any
// predicate runs and never dispatches them to a provider.

use crate::grammar::AtomicRule;
use crate::value::ValueSource;

pub const PERMIT_EMPTY: &str = "permit_empty";
pub const REQUIRED_WITH: &str = "required_with";
pub const REQUIRED_WITHOUT: &str = "required_without";

/// True for rule names handled here rather than by a provider
pub fn is_marker(rule: &str) -> bool {
    matches!(rule, PERMIT_EMPTY | REQUIRED_WITH | REQUIRED_WITHOUT)
}

fn is_filled(field: &str, source: &dyn ValueSource) -> bool {
    source
        .value_of(field.trim())
        .is_some_and(|value| !value.is_empty())
}

/// True when every field in the comma-separated list has a value
///
/// A field missing from `source` counts as empty.
pub fn required_with(fields: &str, source: &dyn ValueSource) -> bool {
    fields.split(',').all(|field| is_filled(field, source))
}

/// True when every field in the comma-separated list is empty
pub fn required_without(fields: &str, source: &dyn ValueSource) -> bool {
    fields.split(',').all(|field| !is_filled(field, source))
}

/// What the conditional markers decided for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Run the field's rules
    Evaluate,
    /// Field is empty and not required: skip every rule
    Skip,
}

/// Consults the `required_with` tokens, or the `required_without` tokens
/// when there are none. A field is skipped only when its value is empty and
/// every consulted token reports it as not required. Tokens without a
/// bracketed field list are ignored.
pub fn gate(rules: &[AtomicRule], value: &str, source: &dyn ValueSource) -> Gate {
    let with: Vec<&str> = gate_params(rules, REQUIRED_WITH).collect();
    let (params, check): (Vec<&str>, fn(&str, &dyn ValueSource) -> bool) = if with.is_empty() {
        (gate_params(rules, REQUIRED_WITHOUT).collect(), required_without)
    } else {
        (with, required_with)
    };

    if params.is_empty() || !value.is_empty() {
        return Gate::Evaluate;
    }

    if params.iter().all(|fields| !check(fields, source)) {
        Gate::Skip
    } else {
        Gate::Evaluate
    }
}

fn gate_params<'a>(rules: &'a [AtomicRule], name: &'a str) -> impl Iterator<Item = &'a str> {
    rules
        .iter()
        .filter(move |rule| rule.is_named(name))
        .filter_map(AtomicRule::param)
}

/// True when `permit_empty` is present and the value is empty
pub fn permits_empty(rules: &[AtomicRule], value: &str) -> bool {
    value.is_empty() && rules.iter().any(|rule| rule.is_named(PERMIT_EMPTY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse_rules;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_required_with() {
        let data = source(&[("a", "1"), ("b", ""), ("c", "3")]);
        assert!(required_with("a,c", &data));
        assert!(required_with("a, c", &data));
        assert!(!required_with("a,b", &data));
        assert!(!required_with("missing", &data));
    }

    #[test]
    fn test_required_without() {
        let data = source(&[("a", "1"), ("b", "")]);
        assert!(required_without("b", &data));
        assert!(required_without("b,missing", &data));
        assert!(!required_without("a,b", &data));
    }

    #[test]
    fn test_gate_skips_when_both_empty() {
        let data = source(&[("a", ""), ("b", "")]);
        let rules = parse_rules("required_with[b]|min_length[3]");
        assert_eq!(gate(&rules, "", &data), Gate::Skip);
    }

    #[test]
    fn test_gate_evaluates_when_other_filled() {
        let data = source(&[("a", ""), ("b", "x")]);
        let rules = parse_rules("required_with[b]|required");
        assert_eq!(gate(&rules, "", &data), Gate::Evaluate);
    }

    #[test]
    fn test_gate_evaluates_non_empty_value() {
        let data = source(&[("b", "")]);
        let rules = parse_rules("required_with[b]|min_length[3]");
        assert_eq!(gate(&rules, "ab", &data), Gate::Evaluate);
    }

    #[test]
    fn test_gate_required_without() {
        let rules = parse_rules("required_without[phone]|required");
        assert_eq!(gate(&rules, "", &source(&[("phone", "555")])), Gate::Skip);
        assert_eq!(gate(&rules, "", &source(&[("phone", "")])), Gate::Evaluate);
    }

    #[test]
    fn test_required_with_takes_precedence() {
        let data = source(&[("b", ""), ("c", "")]);
        // required_with[b] says skip; required_without[c] would say evaluate
        let rules = parse_rules("required_without[c]|required_with[b]|required");
        assert_eq!(gate(&rules, "", &data), Gate::Skip);
    }

    #[test]
    fn test_every_gate_must_skip() {
        let data = source(&[("b", ""), ("c", "x")]);
        let rules = parse_rules("required_with[b]|required_with[c]|required");
        assert_eq!(gate(&rules, "", &data), Gate::Evaluate);
    }

    #[test]
    fn test_bare_marker_is_ignored() {
        let rules = parse_rules("required_with|required");
        assert_eq!(gate(&rules, "", &source(&[])), Gate::Evaluate);
    }

    #[test]
    fn test_permits_empty() {
        let rules = parse_rules("permit_empty|valid_email");
        assert!(permits_empty(&rules, ""));
        assert!(!permits_empty(&rules, "x"));
        assert!(!permits_empty(&parse_rules("valid_email"), ""));
        assert!(is_marker("permit_empty"));
        assert!(!is_marker("required"));
    }
}
