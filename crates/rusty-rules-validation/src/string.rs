//! String validation functions

use crate::numeric::parse_int;

/// Value must not be the empty string
pub fn required(value: &str) -> bool {
    !value.is_empty()
}

/// Length checks count characters, not bytes. A non-numeric length
/// parameter fails the check.
pub fn exact_length(value: &str, param: &str) -> bool {
    length_against(value, param, |len, n| len == n)
}

pub fn min_length(value: &str, param: &str) -> bool {
    length_against(value, param, |len, n| len >= n)
}

pub fn max_length(value: &str, param: &str) -> bool {
    length_against(value, param, |len, n| len <= n)
}

fn length_against(value: &str, param: &str, op: fn(i64, i64) -> bool) -> bool {
    let Some(expected) = parse_int(param) else {
        return false;
    };
    let len = i64::try_from(value.chars().count()).unwrap_or(i64::MAX);
    op(len, expected)
}

/// Equality validators
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}

pub fn not_equals(value: &str, forbidden: &str) -> bool {
    value != forbidden
}

/// Cross-field equality. `other` is the current value of the referenced
/// field, `None` when that field is absent from the value source.
pub fn matches(value: &str, other: Option<&str>) -> bool {
    other == Some(value)
}

/// Cross-field inequality. An absent reference cannot equal the value.
pub fn differs(value: &str, other: Option<&str>) -> bool {
    other != Some(value)
}
