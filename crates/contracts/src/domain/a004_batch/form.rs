use super::aggregate::{Batch, BatchPayload};
use crate::domain::common::NAME_RULE;
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FormModel, ValidatedField};

#[derive(Debug, Clone, PartialEq)]
pub struct BatchForm {
    pub name: ValidatedField,
    /// Category id from the autocomplete; empty until chosen.
    pub category: String,
}

impl Default for BatchForm {
    fn default() -> Self {
        Self {
            name: ValidatedField::new(NAME_RULE),
            category: String::new(),
        }
    }
}

impl From<&Batch> for BatchForm {
    fn from(batch: &Batch) -> Self {
        Self {
            name: ValidatedField::with_value(NAME_RULE, batch.name.clone()),
            category: batch
                .category
                .as_ref()
                .map(|c| c.id().to_string())
                .unwrap_or_default(),
        }
    }
}

impl FormModel for BatchForm {
    type Payload = BatchPayload;

    fn is_ready(&self) -> bool {
        all_ready(&[&self.name]) && self.category.parse::<i64>().is_ok()
    }

    fn payload(&self) -> BatchPayload {
        BatchPayload {
            name: self.name.value.trim().to_string(),
            category_id: self.category.parse().unwrap_or_default(),
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
    fn test_category_is_required() {
        let mut form = BatchForm::default();
        form.name.dispatch(FieldAction::Change("Pinturas".into()));
        assert!(!form.is_ready());
        form.category = "4".into();
        assert!(form.is_ready());
        assert_eq!(
            serde_json::to_value(form.payload()).expect("serialize"),
            json!({"name": "Pinturas", "category_id": 4})
        );
    }

    #[test]
    fn test_edit_reads_nested_category() {
        let batch: Batch = serde_json::from_value(json!({
            "id": 1, "name": "Esmaltes", "category": {"id": 7, "name": "Pinturas"}
        }))
        .expect("parse");
        assert_eq!(BatchForm::from(&batch).category, "7");
    }
}
