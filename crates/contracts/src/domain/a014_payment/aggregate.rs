use serde::{Deserialize, Serialize};

use crate::domain::common::document::display_date;
use crate::domain::common::ListRow;
use crate::shared::choices::{label_for, PAYMENT_METHODS};
use crate::shared::endpoints;
use crate::shared::number::{flexible, format_amount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Compra,
    Venta,
}

impl TransactionType {
    /// Whom the money flows with: the supplier of a purchase or the client
    /// of a sale.
    pub fn counterparty_label(&self) -> &'static str {
        match self {
            TransactionType::Compra => "Proveedor",
            TransactionType::Venta => "Cliente",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Compra => "Compra",
            TransactionType::Venta => "Venta",
        }
    }
}

/// Row of the payments list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    #[serde(default)]
    pub transaction_type: Option<TransactionType>,
    #[serde(default)]
    pub transaction_id: Option<i64>,
    #[serde(default)]
    pub payment_date: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default, deserialize_with = "flexible")]
    pub amount: f64,
}

impl ListRow for Payment {
    const ENDPOINT: &'static str = endpoints::PAYMENTS;
    const COLUMNS: &'static [&'static str] = &["Fecha", "Operación", "Documento", "Método", "Monto"];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            display_date(&self.payment_date),
            self.transaction_type
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
            self.transaction_id
                .map(|id| format!("#{id}"))
                .unwrap_or_else(|| "-".to_string()),
            label_for(&PAYMENT_METHODS, &self.payment_method),
            format_amount(self.amount),
        ]
    }
}

/// Payment nested inside a purchase or sale body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPayload {
    pub payment_method: String,
    pub transaction_type: TransactionType,
    pub amount: String,
    pub payment_date: String,
}

/// Body of `POST payments/` against an existing document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTransactionPayload {
    pub transaction_id: i64,
    pub payment_method: String,
    pub transaction_type: TransactionType,
    pub amount: String,
    pub payment_date: String,
}

impl PaymentTransactionPayload {
    pub fn new(transaction_id: i64, payment: PaymentPayload) -> Self {
        Self {
            transaction_id,
            payment_method: payment.payment_method,
            transaction_type: payment.transaction_type,
            amount: payment.amount,
            payment_date: payment.payment_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payment_row() {
        let payment: Payment = serde_json::from_value(json!({
            "id": 4,
            "transaction_type": "venta",
            "transaction_id": 40,
            "payment_date": "2024-07-02",
            "payment_method": "qr",
            "amount": "150.00"
        }))
        .expect("parse");
        let cells = payment.cells();
        assert_eq!(&cells[..4], ["02-07-2024", "Venta", "#40", "QR"]);
        assert_eq!(cells[4], format_amount(150.0));
    }

    #[test]
    fn test_transaction_body_flattens_payment() {
        let body = PaymentTransactionPayload::new(
            9,
            PaymentPayload {
                payment_method: "efectivo".into(),
                transaction_type: TransactionType::Compra,
                amount: "80".into(),
                payment_date: "2024-06-01".into(),
            },
        );
        assert_eq!(
            serde_json::to_value(body).expect("serialize"),
            json!({
                "transaction_id": 9,
                "payment_method": "efectivo",
                "transaction_type": "compra",
                "amount": "80",
                "payment_date": "2024-06-01"
            })
        );
    }
}
