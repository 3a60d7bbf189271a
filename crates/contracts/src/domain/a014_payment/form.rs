use super::aggregate::{PaymentPayload, PaymentTransactionPayload, TransactionType};
use crate::domain::common::PAYMENT_RULE;
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FieldRule, FormModel, ValidatedField};
use crate::shared::validation::validate_not_future;

pub const PAYMENT_DATE_RULE: FieldRule =
    FieldRule::new(validate_not_future, "La fecha no puede ser posterior a la actual");
pub const CASH_SHORTFALL: &str = "Si la compra es al contado el pago debe cubrir el monto total.";
pub const EXCEEDS_BALANCE: &str = "El pago no puede superar el saldo pendiente.";

/// Amount, date and method of one payment. Embedded in purchase and sale
/// forms and used alone to pay down a balance.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSection {
    pub amount: ValidatedField,
    pub payment_date: ValidatedField,
    /// `efectivo`, `tarjeta` or `qr`; empty until chosen.
    pub payment_method: String,
}

impl Default for PaymentSection {
    fn default() -> Self {
        Self {
            amount: ValidatedField::new(PAYMENT_RULE),
            payment_date: ValidatedField::new(PAYMENT_DATE_RULE),
            payment_method: String::new(),
        }
    }
}

impl PaymentSection {
    /// Nothing entered at all.
    pub fn is_blank(&self) -> bool {
        !self.amount.is_present()
            && !self.payment_date.is_present()
            && self.payment_method.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        all_ready(&[&self.amount, &self.payment_date]) && !self.payment_method.is_empty()
    }

    /// Sets the amount; a cash (`contado`) operation must be paid in full.
    pub fn change_amount(&mut self, value: String, cash_total: Option<f64>) {
        self.amount.dispatch(FieldAction::Change(value));
        if let Some(total) = cash_total {
            if self.amount.is_valid() && self.falls_short(total) {
                self.amount
                    .dispatch(FieldAction::Error(CASH_SHORTFALL.to_string()));
            }
        }
    }

    pub fn falls_short(&self, total: f64) -> bool {
        self.amount.as_f64().unwrap_or_default() < total
    }

    pub fn to_payload(&self, transaction_type: TransactionType) -> PaymentPayload {
        PaymentPayload {
            payment_method: self.payment_method.clone(),
            transaction_type,
            amount: self.amount.value.trim().to_string(),
            payment_date: self.payment_date.value.trim().to_string(),
        }
    }

    /// Errors arrive either flat or nested under `payments`.
    pub fn apply_errors(&mut self, errors: &FieldErrors) {
        if let Some(message) = errors.first("amount") {
            self.amount.dispatch(FieldAction::Error(message));
        }
        if let Some(message) = errors.first("payment_date") {
            self.payment_date.dispatch(FieldAction::Error(message));
        }
    }
}

/// Pays down the balance of an existing purchase or sale.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentForm {
    pub transaction_id: i64,
    pub transaction_type: TransactionType,
    pub counterparty: String,
    pub total: f64,
    pub balance_due: f64,
    pub payment: PaymentSection,
}

impl PaymentForm {
    pub fn new(
        transaction_id: i64,
        transaction_type: TransactionType,
        counterparty: impl Into<String>,
        total: f64,
        balance_due: f64,
    ) -> Self {
        Self {
            transaction_id,
            transaction_type,
            counterparty: counterparty.into(),
            total,
            balance_due,
            payment: PaymentSection::default(),
        }
    }

    pub fn change_amount(&mut self, value: String) {
        self.payment.change_amount(value, None);
        if self.payment.amount.is_valid() && self.exceeds_balance() {
            self.payment
                .amount
                .dispatch(FieldAction::Error(EXCEEDS_BALANCE.to_string()));
        }
    }

    fn exceeds_balance(&self) -> bool {
        self.payment
            .amount
            .as_f64()
            .is_some_and(|a| a > self.balance_due)
    }
}

impl FormModel for PaymentForm {
    type Payload = PaymentTransactionPayload;

    fn is_ready(&self) -> bool {
        self.payment.is_complete()
            && self.payment.amount.as_f64().is_some_and(|a| a > 0.0)
            && !self.exceeds_balance()
    }

    fn payload(&self) -> PaymentTransactionPayload {
        PaymentTransactionPayload::new(
            self.transaction_id,
            self.payment.to_payload(self.transaction_type),
        )
    }

    fn apply_server_errors(&mut self, errors: &FieldErrors) {
        self.payment.apply_errors(errors);
    }
}

/// A form carrying a [`PaymentSection`], with its own rule for the amount.
pub trait PaymentHolder {
    fn payment(&self) -> &PaymentSection;

    fn payment_mut(&mut self) -> &mut PaymentSection;

    fn change_payment_amount(&mut self, value: String);
}

impl PaymentHolder for PaymentForm {
    fn payment(&self) -> &PaymentSection {
        &self.payment
    }

    fn payment_mut(&mut self) -> &mut PaymentSection {
        &mut self.payment
    }

    fn change_payment_amount(&mut self, value: String) {
        self.change_amount(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> String {
        chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
    }

    #[test]
    fn test_payment_body_uses_snake_case_method() {
        let mut form = PaymentForm::new(12, TransactionType::Venta, "Juan Pérez", 300.0, 120.0);
        form.change_amount("100".into());
        form.payment
            .payment_date
            .dispatch(FieldAction::Change(today()));
        form.payment.payment_method = "qr".into();
        assert!(form.is_ready());
        assert_eq!(
            serde_json::to_value(form.payload()).expect("serialize"),
            json!({
                "transaction_id": 12,
                "payment_method": "qr",
                "transaction_type": "venta",
                "amount": "100",
                "payment_date": today(),
            })
        );
    }

    #[test]
    fn test_amount_above_balance_is_rejected() {
        let mut form = PaymentForm::new(3, TransactionType::Compra, "Ferretería Andina", 300.0, 120.0);
        form.change_amount("150".into());
        assert_eq!(form.payment.amount.feedback(), Some(EXCEEDS_BALANCE));
        assert!(!form.is_ready());
    }

    #[test]
    fn test_future_payment_date_is_rejected() {
        let mut section = PaymentSection::default();
        let tomorrow = chrono::Local::now().date_naive() + chrono::Duration::days(1);
        section
            .payment_date
            .dispatch(FieldAction::Change(tomorrow.format("%Y-%m-%d").to_string()));
        assert_eq!(
            section.payment_date.feedback(),
            Some("La fecha no puede ser posterior a la actual")
        );
    }

    #[test]
    fn test_cash_payment_must_cover_total() {
        let mut section = PaymentSection::default();
        section.change_amount("80".into(), Some(100.0));
        assert_eq!(section.amount.feedback(), Some(CASH_SHORTFALL));
        section.change_amount("100".into(), Some(100.0));
        assert!(section.amount.is_valid());
        section.change_amount("80".into(), None);
        assert!(section.amount.is_valid());
    }

    #[test]
    fn test_blank_section() {
        let mut section = PaymentSection::default();
        assert!(section.is_blank());
        section.payment_method = "efectivo".into();
        assert!(!section.is_blank());
        assert!(!section.is_complete());
    }
}
