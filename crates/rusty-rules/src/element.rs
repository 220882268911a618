// File: src/element.rs
// Purpose: Contract with the UI layer for live, per-element validation
//
// The host toolkit owns the actual inputs. It exposes each one through
// `FormElement` and receives the verdict through `FieldObserver`.

use crate::outcome::FieldErrors;
use crate::value::ValueSource;
use std::borrow::Cow;

/// One interactive input as seen by the validator
pub trait FormElement {
    /// Field name; elements without one are not validated
    fn name(&self) -> Option<&str>;

    /// Current value as typed
    fn value(&self) -> &str;

    /// Declared rule-spec; elements without one are not validated
    fn rules(&self) -> Option<&str>;

    /// Unchecked checkboxes validate as the empty string
    fn is_unchecked_checkbox(&self) -> bool {
        false
    }

    /// The value rules are evaluated against
    fn effective_value(&self) -> &str {
        if self.is_unchecked_checkbox() {
            ""
        } else {
            self.value()
        }
    }
}

/// Receives the verdict for each validated element
pub trait FieldObserver<E: ?Sized> {
    fn on_pass(&mut self, element: &E);
    fn on_fail(&mut self, element: &E, errors: &FieldErrors);
}

/// Observer that ignores every signal
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<E: ?Sized> FieldObserver<E> for NoopObserver {
    fn on_pass(&mut self, _element: &E) {}
    fn on_fail(&mut self, _element: &E, _errors: &FieldErrors) {}
}

/// Owned element, for hosts that snapshot their inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputElement {
    pub name: Option<String>,
    pub value: String,
    pub rules: Option<String>,
    /// `Some(checked)` for checkboxes
    pub checked: Option<bool>,
}

impl InputElement {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn checkbox(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        Self {
            checked: Some(checked),
            ..Self::new(name, value)
        }
    }

    pub fn with_rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = Some(rules.into());
        self
    }
}

impl FormElement for InputElement {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn rules(&self) -> Option<&str> {
        self.rules.as_deref()
    }

    fn is_unchecked_checkbox(&self) -> bool {
        self.checked == Some(false)
    }
}

/// Exposes a set of elements as a value source, so cross-field rules see
/// the live values of the other inputs
///
/// With several elements under one name (a checkbox group) the first one
/// carrying a value wins; a group with every box unchecked reads as empty.
#[derive(Debug)]
pub struct ElementSource<'a, E>(pub &'a [E]);

impl<E: FormElement> ValueSource for ElementSource<'_, E> {
    fn value_of(&self, field: &str) -> Option<Cow<'_, str>> {
        let mut named = self.0.iter().filter(|el| el.name() == Some(field)).peekable();
        named.peek()?;
        let value = named
            .find(|el| !el.is_unchecked_checkbox())
            .map_or("", FormElement::value);
        Some(Cow::Borrowed(value))
    }
}
