//! A single input backed by a validation rule.
//!
//! `ValidatedField` replaces the per-form `{value, isValid, feedbackText}`
//! reducers: one predicate and one feedback message parameterise it, and
//! three actions drive it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Validity {
    #[default]
    Valid,
    Invalid(String),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(reason) => Some(reason),
        }
    }
}

/// Predicate plus the message shown when it fails.
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub predicate: fn(&str) -> bool,
    pub feedback: &'static str,
}

impl FieldRule {
    pub const fn new(predicate: fn(&str) -> bool, feedback: &'static str) -> Self {
        Self { predicate, feedback }
    }

    /// Accepts anything; used for free-text fields such as descriptions.
    pub const fn any() -> Self {
        Self {
            predicate: accept_any,
            feedback: "",
        }
    }

    pub fn check(&self, value: &str) -> Validity {
        if (self.predicate)(value) {
            Validity::Valid
        } else {
            Validity::Invalid(self.feedback.to_string())
        }
    }
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("feedback", &self.feedback)
            .finish()
    }
}

fn accept_any(_: &str) -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction {
    /// New text typed by the user; revalidates.
    Change(String),
    /// Blur: revalidates the current text without changing it.
    Focus,
    /// Message from the server; forces the field invalid.
    Error(String),
}

#[derive(Debug, Clone)]
pub struct ValidatedField {
    pub value: String,
    pub validity: Validity,
    rule: FieldRule,
    /// Holds a value loaded from a saved record and not edited since.
    saved: bool,
}

impl ValidatedField {
    /// Fresh field: valid until the user touches it.
    pub fn new(rule: FieldRule) -> Self {
        Self::with_value(rule, String::new())
    }

    /// Prefilled field (edit mode). Also starts valid.
    pub fn with_value(rule: FieldRule, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            validity: Validity::Valid,
            rule,
            saved: false,
        }
    }

    /// Value the server already accepted. Blur leaves it valid until the
    /// user edits it.
    pub fn saved(rule: FieldRule, value: impl Into<String>) -> Self {
        Self {
            saved: true,
            ..Self::with_value(rule, value)
        }
    }

    pub fn reduce(&self, action: FieldAction) -> ValidatedField {
        match action {
            FieldAction::Change(value) => {
                let validity = self.rule.check(&value);
                Self {
                    value,
                    validity,
                    rule: self.rule,
                    saved: false,
                }
            }
            FieldAction::Focus if self.saved => self.clone(),
            FieldAction::Focus => Self {
                validity: self.rule.check(&self.value),
                ..self.clone()
            },
            FieldAction::Error(message) => Self {
                validity: Validity::Invalid(message),
                ..self.clone()
            },
        }
    }

    pub fn dispatch(&mut self, action: FieldAction) {
        *self = self.reduce(action);
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    pub fn feedback(&self) -> Option<&str> {
        self.validity.reason()
    }

    /// Non-blank; the "all required fields present" gate.
    pub fn is_present(&self) -> bool {
        !self.value.trim().is_empty()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
    }

    pub fn rule(&self) -> FieldRule {
        self.rule
    }
}

impl PartialEq for ValidatedField {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.validity == other.validity
    }
}

/// Every listed field is present and valid.
pub fn all_ready(fields: &[&ValidatedField]) -> bool {
    fields.iter().all(|f| f.is_present() && f.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate_name_length;

    const NAME: FieldRule = FieldRule::new(validate_name_length, "Ingrese nombre valido");

    #[test]
    fn test_starts_valid_until_touched() {
        let field = ValidatedField::new(NAME);
        assert!(field.is_valid());
        assert!(!field.is_present());
        assert!(!all_ready(&[&field]));
    }

    #[test]
    fn test_change_revalidates() {
        let field = ValidatedField::new(NAME).reduce(FieldAction::Change("ab".into()));
        assert_eq!(field.value, "ab");
        assert_eq!(field.feedback(), Some("Ingrese nombre valido"));

        let field = field.reduce(FieldAction::Change("abc".into()));
        assert!(field.is_valid());
        assert!(all_ready(&[&field]));
    }

    #[test]
    fn test_focus_checks_untouched_value() {
        let field = ValidatedField::new(NAME).reduce(FieldAction::Focus);
        assert_eq!(field.value, "");
        assert!(!field.is_valid());
    }

    #[test]
    fn test_saved_value_survives_blur_until_edited() {
        let field = ValidatedField::saved(NAME, "ab").reduce(FieldAction::Focus);
        assert!(field.is_valid());
        assert_eq!(field.value, "ab");

        let field = field.reduce(FieldAction::Change("xy".into()));
        assert!(!field.is_valid());
        let field = field
            .reduce(FieldAction::Change("ab".into()))
            .reduce(FieldAction::Focus);
        assert!(!field.is_valid());
    }

    #[test]
    fn test_server_error_keeps_value() {
        let mut field = ValidatedField::with_value(NAME, "Sucursal Centro");
        field.dispatch(FieldAction::Error(
            "Ya existe una agencia con este nombre.".into(),
        ));
        assert_eq!(field.value, "Sucursal Centro");
        assert_eq!(
            field.validity,
            Validity::Invalid("Ya existe una agencia con este nombre.".into())
        );

        field.dispatch(FieldAction::Change("Sucursal Norte".into()));
        assert!(field.is_valid());
    }

    #[test]
    fn test_any_rule_never_fails() {
        let field = ValidatedField::new(FieldRule::any()).reduce(FieldAction::Focus);
        assert!(field.is_valid());
    }
}
