// Rusty-Rules - declarative rule-string validation
// "required|min_length[5]|matches[password]" in, pass/fail and messages out

pub mod conditional;
pub mod config;
pub mod element;
pub mod error;
pub mod form_data;
pub mod grammar;
pub mod messages;
pub mod outcome;
pub mod registry;
pub mod rules;
pub mod validator;
pub mod value;

// Re-export the predicate library
pub use rusty_rules_validation as predicates;

// Re-export core types
pub use config::{FieldRules, ValidatorConfig};
pub use element::{ElementSource, FieldObserver, FormElement, InputElement, NoopObserver};
pub use error::RuleError;
pub use form_data::FormData;
pub use grammar::{parse_rules, split_rules, AtomicRule, RULE_DELIMITER};
pub use messages::{
    default_template, substitute, MessageCatalog, MessageOverrides, RuleMessages, SubstitutionMode,
    FALLBACK_TEMPLATE,
};
pub use outcome::{ErrorMap, FieldErrors, FieldOutcome, FieldState, ValidationOutcome};
pub use registry::{Predicate, RuleProvider, RuleRegistry, RuleSet};
pub use rules::{default_rule_set, default_rules, DEFAULT_PROVIDER};
pub use validator::{EvaluationMode, Validator, ValidatorBuilder, SINGLE_VALUE_FIELD};
pub use value::{FieldValue, NoValues, ValueSource};
