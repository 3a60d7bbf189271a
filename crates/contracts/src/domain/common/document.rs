//! Pieces shared by purchases, sales, entries and outputs.

use serde::{Deserialize, Serialize};

use crate::shared::choices::{label_for, PAYMENT_METHODS};
use crate::shared::number::{flexible, flexible_opt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Proforma,
    Realizado,
    Terminado,
}

impl DocumentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Proforma => "Proforma",
            DocumentStatus::Realizado => "Realizado",
            DocumentStatus::Terminado => "Terminado",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, DocumentStatus::Terminado)
    }
}

/// One stage of a document's lifecycle as drawn by the detail stepper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub label: &'static str,
    /// Date the stage was reached; empty while pending.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stepper {
    pub stages: Vec<Stage>,
    /// Number of completed stages.
    pub active: usize,
}

impl Stepper {
    pub fn is_completed(&self, index: usize) -> bool {
        index < self.active
    }
}

/// `YYYY-MM-DD` from the API shown as `DD-MM-YYYY`.
pub fn display_date(value: &str) -> String {
    match chrono::NaiveDate::parse_from_str(value.get(..10).unwrap_or(value), "%Y-%m-%d") {
        Ok(date) => date.format("%d-%m-%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Product as nested inside a document item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemProduct {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, deserialize_with = "flexible_opt")]
    pub available_stock: Option<f64>,
    #[serde(default, deserialize_with = "flexible_opt")]
    pub minimum_sale_price: Option<f64>,
    #[serde(default, deserialize_with = "flexible_opt")]
    pub maximum_sale_price: Option<f64>,
}

/// Payment already registered against a purchase or sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    #[serde(default)]
    pub payment_date: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default, deserialize_with = "flexible")]
    pub amount: f64,
}

impl PaymentRecord {
    pub fn method_label(&self) -> String {
        label_for(&PAYMENT_METHODS, &self.payment_method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-03-09"), "09-03-2024");
        assert_eq!(display_date("2024-03-09T10:00:00Z"), "09-03-2024");
        assert_eq!(display_date(""), "");
    }

    #[test]
    fn test_status_wire_names() {
        let status: DocumentStatus = serde_json::from_str("\"terminado\"").expect("parse");
        assert!(status.is_finished());
        assert_eq!(
            serde_json::to_string(&DocumentStatus::Realizado).expect("serialize"),
            "\"realizado\""
        );
    }
}
