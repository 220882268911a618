// File: src/registry.rs
// Purpose: Rule providers and the prioritized registry that resolves rule names
//
// Providers are consulted in order, index 0 first. The first provider that
// implements a rule name wins, so a custom provider placed ahead of the
// default set shadows built-in rules and one placed after it only fills gaps.

use crate::error::RuleError;
use crate::rules::default_rules;
use crate::value::ValueSource;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A rule predicate: `(value, param, source) -> passed`
///
/// `param` is the raw text between the brackets of the rule token, `None`
/// for a bare rule. `source` gives read access to the other field values.
pub type Predicate = Arc<dyn Fn(&str, Option<&str>, &dyn ValueSource) -> bool + Send + Sync>;

/// Anything that can supply predicates by rule name
pub trait RuleProvider: Send + Sync {
    /// Provider name, used in logs and debug output
    fn name(&self) -> &str;

    /// Look up the predicate for `rule`, if this provider implements it
    fn predicate(&self, rule: &str) -> Option<Predicate>;
}

/// A named set of predicates, the usual way to write a provider
///
/// ```
/// use rusty_rules::RuleSet;
///
/// let rules = RuleSet::new("house")
///     .rule("even", |value: &str, _param: Option<&str>, _source: &dyn rusty_rules::ValueSource| {
///         value.parse::<i64>().map(|n| n % 2 == 0).unwrap_or(false)
///     });
///
/// assert!(rules.contains("even"));
/// ```
#[derive(Clone)]
pub struct RuleSet {
    name: String,
    rules: IndexMap<String, Predicate>,
}

impl RuleSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: IndexMap::new(),
        }
    }

    /// Builder form of [`RuleSet::insert`]
    pub fn rule<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str, Option<&str>, &dyn ValueSource) -> bool + Send + Sync + 'static,
    {
        self.insert(name, predicate);
        self
    }

    /// Add or replace a rule
    pub fn insert<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&str, Option<&str>, &dyn ValueSource) -> bool + Send + Sync + 'static,
    {
        self.rules.insert(name.into(), Arc::new(predicate));
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.rules.contains_key(rule)
    }

    /// Rule names in insertion order
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl RuleProvider for RuleSet {
    fn name(&self) -> &str {
        &self.name
    }

    fn predicate(&self, rule: &str) -> Option<Predicate> {
        self.rules.get(rule).cloned()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("name", &self.name)
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Ordered list of providers; never empty
#[derive(Clone)]
pub struct RuleRegistry {
    providers: Vec<Arc<dyn RuleProvider>>,
}

impl RuleRegistry {
    /// Registry holding only the default rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry over `providers`, highest priority first
    pub fn with_providers(providers: Vec<Arc<dyn RuleProvider>>) -> Result<Self, RuleError> {
        if providers.is_empty() {
            return Err(RuleError::EmptyRegistry);
        }
        Ok(Self { providers })
    }

    /// Find the predicate for `rule` in the first provider that has one
    pub fn resolve(&self, rule: &str) -> Option<Predicate> {
        self.providers
            .iter()
            .find_map(|provider| provider.predicate(rule))
    }

    /// Name of the provider that would answer for `rule`
    pub fn provider_of(&self, rule: &str) -> Option<&str> {
        self.providers
            .iter()
            .find(|provider| provider.predicate(rule).is_some())
            .map(|provider| provider.name())
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.resolve(rule).is_some()
    }

    /// Replace every provider
    pub fn set_providers(&mut self, providers: Vec<Arc<dyn RuleProvider>>) -> Result<(), RuleError> {
        if providers.is_empty() {
            return Err(RuleError::EmptyRegistry);
        }
        self.providers = providers;
        Ok(())
    }

    /// Replace every provider with a single one
    pub fn set_provider(&mut self, provider: Arc<dyn RuleProvider>) {
        self.providers = vec![provider];
    }

    /// Append a provider at the lowest priority
    pub fn add_provider(&mut self, provider: Arc<dyn RuleProvider>) {
        self.providers.push(provider);
    }

    pub fn providers(&self) -> &[Arc<dyn RuleProvider>] {
        &self.providers
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self {
            providers: vec![default_rules()],
        }
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.providers.iter().map(|provider| provider.name()))
            .finish()
    }
}
