// File: src/validator.rs
// Purpose: Validation orchestrator for batches, single values and live elements
//
// Per field: permit_empty exemption, then the required_with/required_without
// gate, then every remaining rule in parsed order. Batch validation records
// every failing rule of a field; single values and live elements stop at the
// first failure. `stop_on_first_error` overrides both defaults.

use crate::conditional::{gate, is_marker, permits_empty, Gate};
use crate::config::{FieldRules, ValidatorConfig};
use crate::element::{ElementSource, FieldObserver, FormElement};
use crate::error::RuleError;
use crate::grammar::{parse_rules, AtomicRule};
use crate::messages::{MessageCatalog, MessageOverrides, RuleMessages, SubstitutionMode};
use crate::outcome::{ErrorMap, FieldErrors, FieldOutcome, ValidationOutcome};
use crate::registry::{RuleProvider, RuleRegistry};
use crate::rules::default_rules;
use crate::value::{NoValues, ValueSource};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Pseudo-field name used by [`Validator::validate_value`]
pub const SINGLE_VALUE_FIELD: &str = "value";

/// Whether a field keeps evaluating after its first failed rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationMode {
    Accumulate,
    ShortCircuit,
}

/// Declarative validator
///
/// ```
/// use rusty_rules::{FormData, Validator};
///
/// let validator = Validator::builder()
///     .rule("name", "required|min_length[5]")
///     .rule("age", "required|integer|greater_than_equal_to[18]")
///     .build()
///     .unwrap();
///
/// let data = FormData::from_fields([("name", "Jo"), ("age", "17")]);
/// let outcome = validator.validate(&data);
///
/// assert!(!outcome.is_valid);
/// assert!(outcome.errors.message("name", "min_length").is_some());
/// assert!(outcome.errors.message("age", "greater_than_equal_to").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    registry: RuleRegistry,
    rules: FieldRules,
    messages: MessageOverrides,
    stop_on_first_error: Option<bool>,
    placeholders: SubstitutionMode,
}

impl Validator {
    /// Validator with the default rule set and no field rules
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    /// Build from configuration using the default rule set
    pub fn from_config(config: ValidatorConfig) -> Result<Self, RuleError> {
        Self::builder().config(config).build()
    }

    /// Validate `data` against the configured rules
    ///
    /// Fields are visited in rule order. A field with rules but no value in
    /// `data` is validated as the empty string; values without rules are
    /// ignored.
    pub fn validate(&self, data: &impl ValueSource) -> ValidationOutcome {
        self.run_batch(data, &self.rules, &self.messages)
    }

    /// Validate with rules and messages for this call only
    ///
    /// `messages` of `None` keeps the configured templates.
    pub fn validate_with(
        &self,
        data: &impl ValueSource,
        rules: &FieldRules,
        messages: Option<&MessageOverrides>,
    ) -> ValidationOutcome {
        self.run_batch(data, rules, messages.unwrap_or(&self.messages))
    }

    fn run_batch(
        &self,
        data: &dyn ValueSource,
        rules: &FieldRules,
        messages: &MessageOverrides,
    ) -> ValidationOutcome {
        let catalog = MessageCatalog::new(messages, self.placeholders);
        let mode = self.mode_for(EvaluationMode::Accumulate);
        let mut errors = ErrorMap::new();

        for (field, spec) in rules {
            let value = data.value_of(field).unwrap_or_default();
            let outcome = self.evaluate_field(field, &value, spec, data, &catalog, mode);
            errors.insert(field.as_str(), outcome.errors);
        }

        ValidationOutcome::from_errors(errors)
    }

    /// Validate one value against a rule-spec
    ///
    /// Errors are reported under the pseudo-field [`SINGLE_VALUE_FIELD`].
    /// With `messages` of `None` the templates configured for that
    /// pseudo-field apply. Cross-field rules see no other values.
    pub fn validate_value(
        &self,
        value: &str,
        rules: &str,
        messages: Option<&RuleMessages>,
    ) -> ValidationOutcome {
        let overrides: MessageOverrides = messages
            .or_else(|| self.messages.get(SINGLE_VALUE_FIELD))
            .map(|templates| (SINGLE_VALUE_FIELD.to_string(), templates.clone()))
            .into_iter()
            .collect();
        let catalog = MessageCatalog::new(&overrides, self.placeholders);
        let mode = self.mode_for(EvaluationMode::ShortCircuit);

        let outcome = self.evaluate_field(SINGLE_VALUE_FIELD, value, rules, &NoValues, &catalog, mode);

        let mut errors = ErrorMap::new();
        errors.insert(SINGLE_VALUE_FIELD, outcome.errors);
        ValidationOutcome::from_errors(errors)
    }

    /// Validate one live element and signal `observer` once
    ///
    /// Returns `None`, without signalling, for elements lacking a name or a
    /// rule-spec. Skipped fields are signalled as passing.
    pub fn validate_element<E: FormElement>(
        &self,
        element: &E,
        source: &dyn ValueSource,
        observer: &mut dyn FieldObserver<E>,
    ) -> Option<FieldOutcome> {
        let name = element.name().filter(|name| !name.is_empty())?;
        let spec = element.rules().filter(|spec| !spec.is_empty())?;

        let catalog = MessageCatalog::new(&self.messages, self.placeholders);
        let mode = self.mode_for(EvaluationMode::ShortCircuit);
        let outcome = self.evaluate_field(name, element.effective_value(), spec, source, &catalog, mode);

        if outcome.is_valid() {
            observer.on_pass(element);
        } else {
            observer.on_fail(element, &outcome.errors);
        }

        Some(outcome)
    }

    /// Validate every element of a form; cross-field rules read the other
    /// elements' current values
    pub fn validate_form<E: FormElement>(
        &self,
        elements: &[E],
        observer: &mut dyn FieldObserver<E>,
    ) -> ValidationOutcome {
        let source = ElementSource(elements);
        let mut errors = ErrorMap::new();

        for element in elements {
            if let (Some(name), Some(outcome)) =
                (element.name(), self.validate_element(element, &source, &mut *observer))
            {
                errors.insert(name, outcome.errors);
            }
        }

        ValidationOutcome::from_errors(errors)
    }

    /// Every rule named by the configured rule-specs must resolve
    pub fn check_rules(&self) -> Result<(), RuleError> {
        self.rules
            .iter()
            .try_for_each(|(field, spec)| self.check_spec(field, spec))
    }

    /// Every rule named by `spec` must resolve
    pub fn check_spec(&self, field: &str, spec: &str) -> Result<(), RuleError> {
        match parse_rules(spec)
            .into_iter()
            .find(|rule| !is_marker(&rule.name) && !self.registry.contains(&rule.name))
        {
            Some(rule) => Err(RuleError::UnknownRule {
                field: field.to_string(),
                rule: rule.name,
            }),
            None => Ok(()),
        }
    }

    fn mode_for(&self, default: EvaluationMode) -> EvaluationMode {
        match self.stop_on_first_error {
            Some(true) => EvaluationMode::ShortCircuit,
            Some(false) => EvaluationMode::Accumulate,
            None => default,
        }
    }

    fn evaluate_field(
        &self,
        field: &str,
        value: &str,
        spec: &str,
        source: &dyn ValueSource,
        catalog: &MessageCatalog<'_>,
        mode: EvaluationMode,
    ) -> FieldOutcome {
        let rules = parse_rules(spec);

        if permits_empty(&rules, value) {
            debug!(field, "Empty value permitted");
            return FieldOutcome::passed();
        }

        if gate(&rules, value, source) == Gate::Skip {
            debug!(field, "Empty value not required, skipping rules");
            return FieldOutcome::skipped();
        }

        let mut errors = FieldErrors::new();
        for rule in rules.iter().filter(|rule| !is_marker(&rule.name)) {
            if self.apply(field, value, rule, source) {
                continue;
            }

            let message = catalog.resolve(field, &rule.name, rule.param(), value);
            debug!(field, rule = %rule.name, %message, "Rule failed");
            errors.insert(rule.name.as_str(), message);

            if mode == EvaluationMode::ShortCircuit {
                break;
            }
        }

        FieldOutcome::from_errors(errors)
    }

    // Unknown rules pass
    fn apply(&self, field: &str, value: &str, rule: &AtomicRule, source: &dyn ValueSource) -> bool {
        let Some(predicate) = self.registry.resolve(&rule.name) else {
            warn!(field, rule = %rule.name, "No rule provider implements rule, treating as passed");
            return true;
        };

        let passed = predicate(value, rule.param(), source);
        trace!(field, rule = %rule.name, param = ?rule.param(), passed, "Rule evaluated");
        passed
    }

    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }

    pub fn set_rules(&mut self, rules: FieldRules) {
        self.rules = rules;
    }

    /// Set the rule-spec for one field
    pub fn set_rule(&mut self, field: impl Into<String>, spec: impl Into<String>) {
        self.rules.insert(field.into(), spec.into());
    }

    pub fn error_messages(&self) -> &MessageOverrides {
        &self.messages
    }

    pub fn set_error_messages(&mut self, messages: MessageOverrides) {
        self.messages = messages;
    }

    pub fn set_stop_on_first_error(&mut self, stop: Option<bool>) {
        self.stop_on_first_error = stop;
    }

    pub fn set_substitution_mode(&mut self, mode: SubstitutionMode) {
        self.placeholders = mode;
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Replace every rule provider
    pub fn set_providers(&mut self, providers: Vec<Arc<dyn RuleProvider>>) -> Result<(), RuleError> {
        self.registry.set_providers(providers)
    }

    /// Replace every rule provider with a single one
    pub fn set_provider(&mut self, provider: Arc<dyn RuleProvider>) {
        self.registry.set_provider(provider);
    }

    /// Append a rule provider at the lowest priority
    pub fn add_provider(&mut self, provider: Arc<dyn RuleProvider>) {
        self.registry.add_provider(provider);
    }
}

/// Builder for [`Validator`]
///
/// Providers added with [`ValidatorBuilder::provider`] are consulted in the
/// order added, ahead of the default rule set.
pub struct ValidatorBuilder {
    providers: Vec<Arc<dyn RuleProvider>>,
    default_rules: bool,
    config: ValidatorConfig,
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self {
            providers: Vec::new(),
            default_rules: true,
            config: ValidatorConfig::default(),
        }
    }
}

impl ValidatorBuilder {
    /// Take rules, messages and options from `config`
    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rules(mut self, rules: FieldRules) -> Self {
        self.config.rules = rules;
        self
    }

    pub fn rule(mut self, field: impl Into<String>, spec: impl Into<String>) -> Self {
        self.config.rules.insert(field.into(), spec.into());
        self
    }

    pub fn messages(mut self, messages: MessageOverrides) -> Self {
        self.config.error_messages = messages;
        self
    }

    pub fn message(
        mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.config
            .error_messages
            .entry(field.into())
            .or_default()
            .insert(rule.into(), template.into());
        self
    }

    pub fn stop_on_first_error(mut self, stop: bool) -> Self {
        self.config.stop_on_first_error = Some(stop);
        self
    }

    pub fn placeholders(mut self, mode: SubstitutionMode) -> Self {
        self.config.placeholders = mode;
        self
    }

    /// Fail `build` when a rule-spec names an unknown rule
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    pub fn provider(mut self, provider: Arc<dyn RuleProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Leave the default rule set out of the registry
    pub fn without_default_rules(mut self) -> Self {
        self.default_rules = false;
        self
    }

    pub fn build(self) -> Result<Validator, RuleError> {
        let mut providers = self.providers;
        if self.default_rules {
            providers.push(default_rules());
        }

        let ValidatorConfig {
            rules,
            error_messages,
            stop_on_first_error,
            placeholders,
            strict,
        } = self.config;

        let validator = Validator {
            registry: RuleRegistry::with_providers(providers)?,
            rules,
            messages: error_messages,
            stop_on_first_error,
            placeholders,
        };

        if strict {
            validator.check_rules()?;
        }

        Ok(validator)
    }
}
