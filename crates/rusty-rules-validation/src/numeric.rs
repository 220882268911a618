//! Numeric comparison functions
//!
//! Both the value and the rule parameter are read the way a browser's
//! `parseInt` reads them: leading whitespace, an optional sign, then every
//! decimal digit that follows. Input with no leading digits is not a number
//! and any comparison involving it fails. Digit runs too long for `i64`
//! saturate rather than fail.

/// Parses the leading integer of `s`
///
/// # Examples
/// ```
/// use rusty_rules_validation::parse_int;
/// assert_eq!(parse_int(" 42px"), Some(42));
/// assert_eq!(parse_int("-7.9"), Some(-7));
/// assert_eq!(parse_int("abc"), None);
/// ```
pub fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }

    // Only overflow can fail on a non-empty digit run
    let magnitude = unsigned[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn compare(value: &str, param: &str, op: fn(i64, i64) -> bool) -> bool {
    match (parse_int(value), parse_int(param)) {
        (Some(value), Some(bound)) => op(value, bound),
        _ => false,
    }
}

pub fn greater_than(value: &str, param: &str) -> bool {
    compare(value, param, |value, bound| value > bound)
}

pub fn greater_than_equal_to(value: &str, param: &str) -> bool {
    compare(value, param, |value, bound| value >= bound)
}

pub fn less_than(value: &str, param: &str) -> bool {
    compare(value, param, |value, bound| value < bound)
}

pub fn less_than_equal_to(value: &str, param: &str) -> bool {
    compare(value, param, |value, bound| value <= bound)
}
