// File: src/rules.rs
// Purpose: The default rule provider, wiring rusty-rules-validation predicates by name

use crate::registry::{RuleProvider, RuleSet};
use crate::value::ValueSource;
use once_cell::sync::Lazy;
use rusty_rules_validation as v;
use std::sync::Arc;

/// Name of the built-in provider
pub const DEFAULT_PROVIDER: &str = "default";

static DEFAULT_RULES: Lazy<Arc<RuleSet>> = Lazy::new(|| Arc::new(build_default_rules()));

/// The built-in provider, shared by every registry that uses it
pub fn default_rules() -> Arc<dyn RuleProvider> {
    default_rule_set()
}

/// The built-in rule set, for inspecting which rules it offers
pub fn default_rule_set() -> Arc<RuleSet> {
    Arc::clone(&DEFAULT_RULES)
}

// Rule that only looks at the value
fn plain(check: fn(&str) -> bool) -> impl Fn(&str, Option<&str>, &dyn ValueSource) -> bool + Send + Sync {
    move |value: &str, _param: Option<&str>, _source: &dyn ValueSource| check(value)
}

// Rule that needs its bracketed parameter; a bare token fails
fn parameterized(
    check: fn(&str, &str) -> bool,
) -> impl Fn(&str, Option<&str>, &dyn ValueSource) -> bool + Send + Sync {
    move |value: &str, param: Option<&str>, _source: &dyn ValueSource| {
        param.is_some_and(|param| check(value, param))
    }
}

// Rule comparing against another field named by the parameter
fn cross_field(
    check: fn(&str, Option<&str>) -> bool,
) -> impl Fn(&str, Option<&str>, &dyn ValueSource) -> bool + Send + Sync {
    move |value: &str, param: Option<&str>, source: &dyn ValueSource| {
        let other = param.and_then(|field| source.value_of(field.trim()));
        check(value, other.as_deref())
    }
}

fn build_default_rules() -> RuleSet {
    RuleSet::new(DEFAULT_PROVIDER)
        // Presence and length
        .rule("required", plain(v::required))
        .rule("exact_length", parameterized(v::exact_length))
        .rule("min_length", parameterized(v::min_length))
        .rule("max_length", parameterized(v::max_length))
        // Numeric comparison
        .rule("greater_than", parameterized(v::greater_than))
        .rule("greater_than_equal_to", parameterized(v::greater_than_equal_to))
        .rule("less_than", parameterized(v::less_than))
        .rule("less_than_equal_to", parameterized(v::less_than_equal_to))
        // Literal and cross-field equality
        .rule("equals", parameterized(v::equals))
        .rule("not_equals", parameterized(v::not_equals))
        .rule("matches", cross_field(v::matches))
        .rule("differs", cross_field(v::differs))
        // Lists
        .rule("in_list", parameterized(v::in_list))
        .rule("not_in_list", parameterized(v::not_in_list))
        // Character classes
        .rule("alpha", plain(v::alpha))
        .rule("alpha_space", plain(v::alpha_space))
        .rule("alpha_dash", plain(v::alpha_dash))
        .rule("alpha_numeric", plain(v::alpha_numeric))
        .rule("alpha_numeric_space", plain(v::alpha_numeric_space))
        .rule("alpha_numeric_punct", plain(v::alpha_numeric_punct))
        .rule("numeric", plain(v::numeric))
        .rule("decimal", plain(v::decimal))
        .rule("integer", plain(v::integer))
        .rule("is_natural", plain(v::is_natural))
        .rule("is_natural_no_zero", plain(v::is_natural_no_zero))
        .rule("hex", plain(v::hex))
        // Formats
        .rule("valid_email", plain(v::valid_email))
        .rule("valid_url", plain(v::valid_url))
        .rule(
            "valid_ip",
            |value: &str, param: Option<&str>, _source: &dyn ValueSource| v::valid_ip(value, param),
        )
        .rule(
            "valid_date",
            |value: &str, param: Option<&str>, _source: &dyn ValueSource| v::valid_date(value, param),
        )
        .rule("regex_match", parameterized(v::regex_match))
}
