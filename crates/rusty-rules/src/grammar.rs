// File: src/grammar.rs
// Purpose: Rule-spec grammar ("required|min_length[5]|in_list[a|b]")
//
// A rule-spec is a `|`-separated list of rules. Each rule is a bare name or
// a name followed by a bracketed parameter. A `|` only separates rules when
// every `[` seen so far in the current rule has a matching `]`, so
// parameters may contain the delimiter. `\[` and `\]` are escaped and do not
// count toward that balance.

/// Separates rules within a rule-spec
pub const RULE_DELIMITER: char = '|';

/// One parsed rule: `min_length[5]` is `{ name: "min_length", param: Some("5") }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomicRule {
    pub name: String,
    pub param: Option<String>,
}

impl AtomicRule {
    /// Parses a single rule token
    ///
    /// The name runs up to the first `[`, the parameter from there to the
    /// last `]`. A token without a closing bracket is all name.
    ///
    /// # Examples
    ///
    /// ```
    /// use rusty_rules::AtomicRule;
    ///
    /// let rule = AtomicRule::parse("in_list[a|b]");
    /// assert_eq!(rule.name, "in_list");
    /// assert_eq!(rule.param(), Some("a|b"));
    ///
    /// assert_eq!(AtomicRule::parse("required").param(), None);
    /// ```
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        let bracketed = token
            .find('[')
            .and_then(|open| token.rfind(']').filter(|close| *close > open).map(|close| (open, close)));

        match bracketed {
            Some((open, close)) => Self {
                name: token[..open].trim().to_string(),
                param: Some(token[open + 1..close].to_string()),
            },
            None => Self {
                name: token.to_string(),
                param: None,
            },
        }
    }

    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

/// Splits a rule-spec into rule tokens
///
/// Tokens are trimmed, empty tokens are dropped and exact duplicates keep
/// only their first occurrence. The scan is a single pass, so a bracket
/// that never closes simply extends the last token to the end of the input.
///
/// # Examples
///
/// ```
/// use rusty_rules::split_rules;
///
/// assert_eq!(split_rules("a|b|c"), vec!["a", "b", "c"]);
/// assert_eq!(split_rules("in_list[a|b]|required"), vec!["in_list[a|b]", "required"]);
/// assert_eq!(split_rules("x|x"), vec!["x"]);
/// assert!(split_rules("").is_empty());
/// ```
pub fn split_rules(spec: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut balance: i64 = 0;
    let mut start = 0;
    let mut after_backslash = false;

    for (idx, ch) in spec.char_indices() {
        let escaped = after_backslash;
        after_backslash = ch == '\\' && !escaped;

        match ch {
            '[' if !escaped => balance += 1,
            ']' if !escaped => balance -= 1,
            RULE_DELIMITER if balance == 0 => {
                push_token(&mut tokens, &spec[start..idx]);
                start = idx + ch.len_utf8();
            }
            _ => {}
        }
    }
    push_token(&mut tokens, &spec[start..]);

    tokens
}

fn push_token(tokens: &mut Vec<String>, raw: &str) {
    let token = raw.trim();
    if !token.is_empty() && !tokens.iter().any(|seen| seen == token) {
        tokens.push(token.to_string());
    }
}

/// Splits and parses a rule-spec in one go
pub fn parse_rules(spec: &str) -> Vec<AtomicRule> {
    split_rules(spec).iter().map(|token| AtomicRule::parse(token)).collect()
}
