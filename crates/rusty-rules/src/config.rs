// File: src/config.rs
// Purpose: Validator configuration, loadable from TOML or JSON

use crate::error::RuleError;
use crate::messages::{MessageOverrides, SubstitutionMode};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Field name → rule-spec, in evaluation order
pub type FieldRules = IndexMap<String, String>;

/// Validator configuration
///
/// ```toml
/// stop_on_first_error = true
///
/// [rules]
/// name = "required|min_length[5]"
/// age = "required|integer|greater_than_equal_to[18]"
///
/// [error_messages.age]
/// greater_than_equal_to = "You are only {value}. Minimum age requirement is {param}"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Rule-spec per field
    #[serde(default)]
    pub rules: FieldRules,

    /// Message templates per field and rule
    #[serde(default, alias = "errorMessages")]
    pub error_messages: MessageOverrides,

    /// `None` keeps each entry point's own default: batch validation
    /// reports every failing rule, single values and live elements stop at
    /// the first
    #[serde(default, alias = "stopOnFirstError")]
    pub stop_on_first_error: Option<bool>,

    #[serde(default)]
    pub placeholders: SubstitutionMode,

    /// Reject rule-specs naming rules no provider implements
    #[serde(default)]
    pub strict: bool,
}

impl ValidatorConfig {
    /// Load a TOML config file; a missing or blank file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read validation config: {:?}", path))
            }
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse validation config: {:?}", path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RuleError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse the camelCase object form (`rules`, `errorMessages`)
    pub fn from_json_str(content: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(content)?)
    }
}
