use super::aggregate::{Category, CategoryPayload};
use crate::domain::common::NAME_RULE;
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FormModel, ValidatedField};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryForm {
    pub name: ValidatedField,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            name: ValidatedField::new(NAME_RULE),
        }
    }
}

impl From<&Category> for CategoryForm {
    fn from(category: &Category) -> Self {
        Self {
            name: ValidatedField::with_value(NAME_RULE, category.name.clone()),
        }
    }
}

impl FormModel for CategoryForm {
    type Payload = CategoryPayload;

    fn is_ready(&self) -> bool {
        all_ready(&[&self.name])
    }

    fn payload(&self) -> CategoryPayload {
        CategoryPayload {
            name: self.name.value.trim().to_string(),
        }
    }

    fn apply_server_errors(&mut self, errors: &FieldErrors) {
        if let Some(message) = errors.first("name") {
            self.name.dispatch(FieldAction::Error(message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_short_name_is_rejected() {
        let mut form = CategoryForm::default();
        form.name.dispatch(FieldAction::Change("ab".into()));
        assert_eq!(form.name.feedback(), Some("Ingrese nombre valido"));
        assert!(!form.is_ready());
    }

    #[test]
    fn test_payload_trims_name() {
        let mut form = CategoryForm::default();
        form.name.dispatch(FieldAction::Change("  Herramientas ".into()));
        assert!(form.is_ready());
        assert_eq!(
            serde_json::to_value(form.payload()).expect("serialize"),
            json!({"name": "Herramientas"})
        );
    }
}
