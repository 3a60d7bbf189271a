//! Types shared by every entity

pub mod document;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use crate::shared::choices::NamedRef;
use crate::shared::form::FieldRule;
use crate::shared::validation::{
    validate_address_length, validate_code, validate_cost, validate_email, validate_name_length,
    validate_ci_number, validate_phone_number, validate_positive_number, validate_today,
};

pub const NAME_RULE: FieldRule = FieldRule::new(validate_name_length, "Ingrese nombre valido");
pub const ADDRESS_RULE: FieldRule =
    FieldRule::new(validate_address_length, "Ingrese una dirección valida");
pub const PHONE_RULE: FieldRule = FieldRule::new(validate_phone_number, "Ingrese teléfono válido");
pub const NIT_RULE: FieldRule = FieldRule::new(validate_ci_number, "Ingrese nit válido");
pub const EMAIL_RULE: FieldRule = FieldRule::new(validate_email, "Ingrese correo válido");
pub const CODE_RULE: FieldRule = FieldRule::new(validate_code, "Ingrese código válido");
pub const NUMBER_RULE: FieldRule =
    FieldRule::new(validate_positive_number, "Ingrese un número válido.");
pub const COST_RULE: FieldRule = FieldRule::new(validate_cost, "Ingrese un número válido.");
pub const PAYMENT_RULE: FieldRule = FieldRule::new(validate_positive_number, "Ingrese pago valido");
/// Sale and purchase dates: only the current day.
pub const TODAY_RULE: FieldRule = FieldRule::new(
    validate_today,
    "La fecha no puede ser anterior ni posterior a la actual",
);

/// Row of a paginated list endpoint, flattened into table cells.
pub trait ListRow: DeserializeOwned + Clone + 'static {
    /// Collection path, also the POST target.
    const ENDPOINT: &'static str;
    /// Header labels, one per cell.
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;

    fn cells(&self) -> Vec<String>;
}

/// Foreign key as serialized by the API: either the bare id or a nested
/// object with a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Related {
    Named(NamedRef),
    Id(i64),
}

impl Related {
    pub fn id(&self) -> i64 {
        match self {
            Related::Named(r) => r.id,
            Related::Id(id) => *id,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Related::Named(r) => r.name.clone(),
            Related::Id(id) => format!("#{id}"),
        }
    }
}

/// User embedded in documents (buyer, seller).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

pub fn label_of(r: &Option<Related>) -> String {
    r.as_ref().map(Related::label).unwrap_or_default()
}

pub fn or_dash(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_trims_missing_parts() {
        let p = Person {
            first_name: "Luis".into(),
            last_name: String::new(),
        };
        assert_eq!(p.full_name(), "Luis");
    }

    #[test]
    fn test_related_accepts_id_or_object() {
        let id: Related = serde_json::from_str("3").expect("id");
        assert_eq!(id.id(), 3);
        assert_eq!(id.label(), "#3");
        let named: Related =
            serde_json::from_str(r#"{"id": 4, "name": "Central", "extra": 1}"#).expect("named");
        assert_eq!(named.id(), 4);
        assert_eq!(named.label(), "Central");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(&None), "-");
        assert_eq!(or_dash(&Some(String::new())), "-");
        assert_eq!(or_dash(&Some("2024-01-01".into())), "2024-01-01");
    }
}
