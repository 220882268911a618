/// Rule provider resolution through the validator
///
/// Custom providers shadow the default rule set when placed ahead of it
/// and only add new rules when placed after it.

use rusty_rules::{
    default_rules, FormData, RuleError, RuleProvider, RuleSet, Validator, ValueSource,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn counting_required(calls: Arc<AtomicUsize>) -> RuleSet {
    RuleSet::new("spy").rule(
        "required",
        move |value: &str, _param: Option<&str>, _source: &dyn ValueSource| {
            calls.fetch_add(1, Ordering::SeqCst);
            !value.trim().is_empty()
        },
    )
}

#[test]
fn test_custom_provider_shadows_default() {
    let calls = Arc::new(AtomicUsize::new(0));
    let validator = Validator::builder()
        .provider(Arc::new(counting_required(Arc::clone(&calls))))
        .rule("name", "required")
        .build()
        .unwrap();

    // The default `required` accepts whitespace; the custom one does not
    let outcome = validator.validate(&FormData::from_fields([("name", "   ")]));
    assert!(!outcome.is_valid);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(validator.registry().provider_of("required"), Some("spy"));
}

#[test]
fn test_added_provider_does_not_shadow() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut validator = Validator::builder().rule("name", "required").build().unwrap();
    validator.add_provider(Arc::new(counting_required(Arc::clone(&calls))));

    let outcome = validator.validate(&FormData::from_fields([("name", "   ")]));
    assert!(outcome.is_valid);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_added_provider_supplies_new_rules() {
    let mut validator = Validator::builder()
        .rule("qty", "required|even")
        .message("qty", "even", "{field} must be even, got {value}")
        .build()
        .unwrap();
    validator.add_provider(Arc::new(RuleSet::new("numbers").rule(
        "even",
        |value: &str, _param: Option<&str>, _source: &dyn ValueSource| {
            value.parse::<i64>().is_ok_and(|n| n % 2 == 0)
        },
    )));

    assert!(validator.validate(&FormData::from_fields([("qty", "4")])).is_valid);
    let outcome = validator.validate(&FormData::from_fields([("qty", "3")]));
    assert_eq!(outcome.get_error("qty"), Some("qty must be even, got 3"));
}

#[test]
fn test_set_provider_drops_defaults() {
    let mut validator = Validator::builder().rule("name", "alpha").build().unwrap();
    validator.set_provider(Arc::new(RuleSet::new("empty")));

    // `alpha` no longer resolves and unknown rules pass
    assert!(validator.validate(&FormData::from_fields([("name", "123")])).is_valid);
    assert!(validator.check_rules().is_err());
}

#[test]
fn test_set_providers_order() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut validator = Validator::builder().rule("name", "required").build().unwrap();
    let providers: Vec<Arc<dyn RuleProvider>> =
        vec![default_rules(), Arc::new(counting_required(Arc::clone(&calls)))];
    validator.set_providers(providers).unwrap();

    validator.validate(&FormData::from_fields([("name", "x")]));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(matches!(validator.set_providers(Vec::new()), Err(RuleError::EmptyRegistry)));
}

#[test]
fn test_provider_sees_param_and_source() {
    let validator = Validator::builder()
        .provider(Arc::new(RuleSet::new("house").rule(
            "after",
            |value: &str, param: Option<&str>, source: &dyn ValueSource| {
                let other = param.and_then(|field| source.value_of(field));
                match (value.parse::<i64>(), other.as_deref().map(str::parse::<i64>)) {
                    (Ok(end), Some(Ok(start))) => end > start,
                    _ => false,
                }
            },
        )))
        .rule("end", "after[start]")
        .build()
        .unwrap();

    assert!(validator.validate(&FormData::from_fields([("start", "3"), ("end", "5")])).is_valid);
    assert!(!validator.validate(&FormData::from_fields([("start", "5"), ("end", "3")])).is_valid);
}
