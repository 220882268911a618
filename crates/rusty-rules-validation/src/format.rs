//! Character-class and pattern validators

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("built-in validation pattern must compile")
}

// Common regex patterns
static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)^[a-z]+$"));
static ALPHA_SPACE_REGEX: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)^[a-z ]+$"));
static ALPHA_DASH_REGEX: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)^[a-z0-9_-]+$"));
static ALPHA_NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)^[a-z0-9]+$"));
static ALPHA_NUMERIC_SPACE_REGEX: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)^[a-z0-9 ]+$"));
static ALPHA_NUMERIC_PUNCT_REGEX: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)^[a-z0-9 ~!#$%&*\-_+=|:.]+$"));

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| pattern(r"^[-+]?[0-9]*\.?[0-9]+$"));
static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| pattern(r"^[-+]?[0-9]+$"));
static NATURAL_REGEX: Lazy<Regex> = Lazy::new(|| pattern(r"^[0-9]+$"));
static HEX_REGEX: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)^[0-9a-f]+$"));

// Deliberately loose: anything shaped like `x@y.z` without whitespace
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| pattern(r"^\S+@\S+\.\S+$"));

pub fn alpha(value: &str) -> bool {
    ALPHA_REGEX.is_match(value)
}

pub fn alpha_space(value: &str) -> bool {
    ALPHA_SPACE_REGEX.is_match(value)
}

pub fn alpha_dash(value: &str) -> bool {
    ALPHA_DASH_REGEX.is_match(value)
}

pub fn alpha_numeric(value: &str) -> bool {
    ALPHA_NUMERIC_REGEX.is_match(value)
}

pub fn alpha_numeric_space(value: &str) -> bool {
    ALPHA_NUMERIC_SPACE_REGEX.is_match(value)
}

/// Letters, digits, spaces and `~ ! # $ % & * - _ + = | : .`
pub fn alpha_numeric_punct(value: &str) -> bool {
    ALPHA_NUMERIC_PUNCT_REGEX.is_match(value)
}

/// Optionally signed number with an optional fractional part (`-1.5`, `.5`, `42`)
pub fn numeric(value: &str) -> bool {
    NUMERIC_REGEX.is_match(value)
}

pub fn decimal(value: &str) -> bool {
    NUMERIC_REGEX.is_match(value)
}

pub fn integer(value: &str) -> bool {
    INTEGER_REGEX.is_match(value)
}

/// Digits only (`0` included)
pub fn is_natural(value: &str) -> bool {
    NATURAL_REGEX.is_match(value)
}

/// Digits only, and not all zeros
pub fn is_natural_no_zero(value: &str) -> bool {
    is_natural(value) && value.bytes().any(|b| b != b'0')
}

pub fn hex(value: &str) -> bool {
    HEX_REGEX.is_match(value)
}

pub fn valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Upper bound on cached `regex_match` patterns
const REGEX_CACHE_LIMIT: usize = 256;

static REGEX_CACHE: Lazy<Mutex<HashMap<String, Option<Regex>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Regex pattern matching
///
/// The pattern may be written in slash-delimited form (`/^[a-z]+$/`): a
/// leading `/` drops the first and the last character. Matching is case
/// insensitive. Compiled patterns are cached, and a pattern that does not
/// compile never matches. The cache is emptied once it holds
/// `REGEX_CACHE_LIMIT` patterns.
pub fn regex_match(value: &str, pattern: &str) -> bool {
    let pattern = strip_delimiters(pattern);

    let mut cache = REGEX_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if !cache.contains_key(pattern) && cache.len() >= REGEX_CACHE_LIMIT {
        cache.clear();
    }
    let regex = cache.entry(pattern.to_string()).or_insert_with(|| {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .ok()
    });

    regex.as_ref().is_some_and(|regex| regex.is_match(value))
}

fn strip_delimiters(pattern: &str) -> &str {
    match pattern.strip_prefix('/') {
        Some(rest) => {
            let mut chars = rest.chars();
            chars.next_back();
            chars.as_str()
        }
        None => pattern,
    }
}
