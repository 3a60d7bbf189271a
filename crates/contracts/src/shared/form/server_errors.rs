//! Django REST style error bodies: `{"field": ["message", ...], ...}`.
//!
//! Nested line items arrive as `{"sale_items": [{}, {"quantity": ["..."]}]}`,
//! one object per submitted row in submission order.

use serde_json::{Map, Value};

const GENERAL_KEYS: [&str; 3] = ["non_field_errors", "detail", "error"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(Map<String, Value>);

impl FieldErrors {
    /// Anything that is not a JSON object yields an empty set.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body)
            .map(Self::from_value)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message for `field`. A bare string counts as one message.
    pub fn first(&self, field: &str) -> Option<String> {
        first_message(self.0.get(field)?)
    }

    /// Per-row errors for a nested list such as `sale_items`.
    pub fn items(&self, field: &str) -> Vec<FieldErrors> {
        match self.0.get(field) {
            Some(Value::Array(rows)) if rows.iter().any(Value::is_object) => rows
                .iter()
                .cloned()
                .map(FieldErrors::from_value)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Errors of a nested object such as `payments`.
    pub fn nested(&self, field: &str) -> FieldErrors {
        self.0
            .get(field)
            .cloned()
            .map(FieldErrors::from_value)
            .unwrap_or_default()
    }

    /// Error not tied to any field.
    pub fn general(&self) -> Option<String> {
        GENERAL_KEYS.iter().find_map(|key| self.first(key))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_message_per_field() {
        let errors = FieldErrors::from_value(json!({
            "name": ["Ya existe una agencia con este nombre.", "otro"],
            "detail": "No autorizado",
        }));
        assert_eq!(
            errors.first("name").as_deref(),
            Some("Ya existe una agencia con este nombre.")
        );
        assert_eq!(errors.first("location"), None);
        assert_eq!(errors.general().as_deref(), Some("No autorizado"));
    }

    #[test]
    fn test_nested_items_keep_row_order() {
        let errors = FieldErrors::parse(
            r#"{"sale_items": [{}, {"quantity": ["Stock insuficiente."]}]}"#,
        );
        let items = errors.items("sale_items");
        assert_eq!(items.len(), 2);
        assert!(items[0].is_empty());
        assert_eq!(items[1].first("quantity").as_deref(), Some("Stock insuficiente."));
    }

    #[test]
    fn test_flat_list_is_not_nested() {
        let errors = FieldErrors::from_value(json!({"sale_items": ["Requerido."]}));
        assert!(errors.items("sale_items").is_empty());
        assert_eq!(errors.first("sale_items").as_deref(), Some("Requerido."));
    }

    #[test]
    fn test_nested_object() {
        let errors = FieldErrors::from_value(json!({
            "payments": {"amount": ["Monto inválido."]}
        }));
        assert_eq!(
            errors.nested("payments").first("amount").as_deref(),
            Some("Monto inválido.")
        );
        assert!(errors.nested("sale_items").is_empty());
    }

    #[test]
    fn test_garbage_body_is_empty() {
        assert!(FieldErrors::parse("<html>").is_empty());
        assert!(FieldErrors::from_value(json!([1, 2])).is_empty());
    }
}
