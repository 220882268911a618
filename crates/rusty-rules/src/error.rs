// File: src/error.rs
// Purpose: Configuration-time errors
//
// Validation failures are never errors: they are reported as data in the
// validation outcome. These variants cover misuse detected while the
// validator is being configured.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    /// A registry was given an empty provider list
    #[error("rule registry needs at least one rule provider")]
    EmptyRegistry,

    /// Strict mode found a rule that no registered provider implements
    #[error("field '{field}' uses rule '{rule}', which no rule provider implements")]
    UnknownRule { field: String, rule: String },

    /// Configuration content could not be parsed
    #[error("invalid validator configuration: {0}")]
    InvalidConfig(String),
}

impl From<toml::de::Error> for RuleError {
    fn from(err: toml::de::Error) -> Self {
        RuleError::InvalidConfig(err.to_string())
    }
}

impl From<serde_json::Error> for RuleError {
    fn from(err: serde_json::Error) -> Self {
        RuleError::InvalidConfig(err.to_string())
    }
}
