//! List membership functions
//!
//! List parameters are comma separated (`in_list[red,green,blue]`).
//! Candidates are compared verbatim, so `a, b` holds `"a"` and `" b"`.

/// Splits a comma separated rule parameter into its items
pub fn split_list(param: &str) -> impl Iterator<Item = &str> {
    param.split(',')
}

pub fn in_list(value: &str, param: &str) -> bool {
    split_list(param).any(|candidate| candidate == value)
}

pub fn not_in_list(value: &str, param: &str) -> bool {
    !in_list(value, param)
}
