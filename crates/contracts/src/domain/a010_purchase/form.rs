use super::aggregate::{PurchaseItemPayload, PurchasePayload};
use crate::domain::a014_payment::aggregate::TransactionType;
use crate::domain::a014_payment::form::{PaymentHolder, PaymentSection};
use crate::domain::common::document::DocumentStatus;
use crate::domain::common::TODAY_RULE;
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FieldRule, FormModel, ValidatedField};
use crate::shared::line_items::{LineField, LineForm, LineItems, PickerScope};
use crate::shared::number::round2;
use crate::shared::validation::validate_positive_number;

pub const INVOICE_RULE: FieldRule =
    FieldRule::new(validate_positive_number, "Ingrese número valido");
pub const LINE_FIELDS: [LineField; 2] = [LineField::Quantity, LineField::Price];

/// New purchase for the selected agency. Purchases are created already
/// performed and always carry their first payment.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseForm {
    pub agency: i64,
    /// Supplier id from the autocomplete; empty until chosen.
    pub supplier: String,
    pub purchase_date: ValidatedField,
    pub invoice_number: ValidatedField,
    /// `contado` or `credito`; empty until chosen.
    pub purchase_type: String,
    pub lines: LineItems,
    pub payment: PaymentSection,
}

impl PurchaseForm {
    pub fn new(agency: i64) -> Self {
        Self {
            agency,
            supplier: String::new(),
            purchase_date: ValidatedField::new(TODAY_RULE),
            invoice_number: ValidatedField::new(INVOICE_RULE),
            purchase_type: String::new(),
            lines: LineItems::new(),
            payment: PaymentSection::default(),
        }
    }

    pub fn scope(&self) -> PickerScope {
        PickerScope::Agency {
            agency: self.agency,
        }
    }

    pub fn is_cash(&self) -> bool {
        self.purchase_type == "contado"
    }

    pub fn total(&self) -> f64 {
        self.lines.grand_total()
    }

    pub fn change_payment_amount(&mut self, value: String) {
        let cash_total = self.is_cash().then(|| self.total());
        self.payment.change_amount(value, cash_total);
    }
}

impl FormModel for PurchaseForm {
    type Payload = PurchasePayload;

    fn is_ready(&self) -> bool {
        all_ready(&[&self.purchase_date, &self.invoice_number])
            && self.supplier.parse::<i64>().is_ok()
            && !self.purchase_type.is_empty()
            && self.lines.is_ready(&LINE_FIELDS)
            && self.payment.is_complete()
            && !(self.is_cash() && self.payment.falls_short(self.total()))
    }

    fn payload(&self) -> PurchasePayload {
        let total = self.total();
        PurchasePayload {
            agency: self.agency,
            supplier: self.supplier.parse().unwrap_or_default(),
            purchase_date: self.purchase_date.value.trim().to_string(),
            invoice_number: self.invoice_number.value.trim().to_string(),
            purchase_type: self.purchase_type.clone(),
            status: DocumentStatus::Realizado,
            total,
            balance_due: total,
            purchase_items: self
                .lines
                .items()
                .iter()
                .map(|l| PurchaseItemPayload {
                    product_stock: l.product_id(),
                    quantity: l.quantity.value.trim().to_string(),
                    unit_price: l.price.value.trim().to_string(),
                    total_price: round2(l.sub_total().unwrap_or_default()),
                })
                .collect(),
            payments: self.payment.to_payload(TransactionType::Compra),
        }
    }

    fn apply_server_errors(&mut self, errors: &FieldErrors) {
        if let Some(message) = errors.first("invoice_number") {
            self.invoice_number.dispatch(FieldAction::Error(message));
        }
        if let Some(message) = errors.first("purchase_date") {
            self.purchase_date.dispatch(FieldAction::Error(message));
        }
        self.payment.apply_errors(&errors.nested("payments"));
        self.lines.apply_errors(&errors.items("purchase_items"));
    }
}

impl LineForm for PurchaseForm {
    fn lines(&self) -> &LineItems {
        &self.lines
    }

    fn lines_mut(&mut self) -> &mut LineItems {
        &mut self.lines
    }
}

impl PaymentHolder for PurchaseForm {
    fn payment(&self) -> &PaymentSection {
        &self.payment
    }

    fn payment_mut(&mut self) -> &mut PaymentSection {
        &mut self.payment
    }

    fn change_payment_amount(&mut self, value: String) {
        PurchaseForm::change_payment_amount(self, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a010_purchase::aggregate::Purchase;
    use crate::domain::common::ListRow;
    use crate::shared::line_items::CatalogItem;
    use crate::system::auth::UserType;
    use serde_json::json;

    fn today() -> String {
        chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
    }

    fn filled(kind: &str) -> PurchaseForm {
        let mut form = PurchaseForm::new(2);
        form.supplier = "6".into();
        form.purchase_type = kind.into();
        form.purchase_date.dispatch(FieldAction::Change(today()));
        form.invoice_number.dispatch(FieldAction::Change("1045".into()));
        form.lines.add(CatalogItem {
            id: 31,
            name: "Cemento".into(),
            price: Some(40.0),
            ..Default::default()
        });
        form.lines.change(31, LineField::Quantity, "10".into());
        form.payment.payment_method = "efectivo".into();
        form.payment
            .payment_date
            .dispatch(FieldAction::Change(today()));
        form
    }

    #[test]
    fn test_cash_purchase_requires_full_payment() {
        let mut form = filled("contado");
        form.change_payment_amount("300".into());
        assert_eq!(
            form.payment.amount.feedback(),
            Some("Si la compra es al contado el pago debe cubrir el monto total.")
        );
        assert!(!form.is_ready());

        form.change_payment_amount("400".into());
        assert!(form.is_ready());
    }

    #[test]
    fn test_credit_purchase_accepts_partial_payment() {
        let mut form = filled("credito");
        form.change_payment_amount("100".into());
        assert!(form.is_ready());

        let body = serde_json::to_value(form.payload()).expect("serialize");
        assert_eq!(body["status"], json!("realizado"));
        assert_eq!(body["total"], json!(400.0));
        assert_eq!(body["balance_due"], json!(400.0));
        assert_eq!(
            body["purchase_items"],
            json!([{"product_stock": 31, "quantity": "10", "unit_price": "40", "total_price": 400.0}])
        );
        assert_eq!(body["payments"]["transaction_type"], json!("compra"));
        assert_eq!(body["payments"]["amount"], json!("100"));
    }

    #[test]
    fn test_purchase_date_must_be_today() {
        let mut form = filled("credito");
        form.purchase_date
            .dispatch(FieldAction::Change("2020-01-01".into()));
        assert_eq!(
            form.purchase_date.feedback(),
            Some("La fecha no puede ser anterior ni posterior a la actual")
        );
    }

    #[test]
    fn test_nested_payment_errors() {
        let mut form = filled("credito");
        form.change_payment_amount("100".into());
        form.apply_server_errors(&FieldErrors::from_value(json!({
            "payments": {"payment_date": ["Fecha inválida."]},
            "purchase_items": [{"unit_price": ["Precio inválido."]}]
        })));
        assert_eq!(form.payment.payment_date.feedback(), Some("Fecha inválida."));
        assert_eq!(form.lines.items()[0].price.feedback(), Some("Precio inválido."));
        assert!(!form.is_ready());
    }

    fn purchase(status: &str, balance: f64) -> Purchase {
        serde_json::from_value(json!({
            "id": 9,
            "buyer": {"first_name": "Ana", "last_name": "Rojas"},
            "suppliers": {"id": 6, "name": "Ferretería Andina"},
            "purchase_date": "2024-06-01",
            "purchase_end_date": "2024-06-03",
            "invoice_number": 1045,
            "purchase_type": "credito",
            "status": status,
            "total": "400.00",
            "balance_due": balance,
            "purchase_items": [],
            "payments": [{"payment_date": "2024-06-01", "payment_method": "efectivo", "amount": "100.00"}]
        }))
        .expect("parse")
    }

    #[test]
    fn test_row_and_actions() {
        let row = purchase("realizado", 300.0);
        assert_eq!(
            row.cells(),
            vec!["Ana Rojas", "Ferretería Andina", "Crédito", "01-06-2024", "1045", "400.00", "300.00"]
        );
        assert!(row.can_register_entry(Some(UserType::Warehouse)));
        assert!(!row.can_register_entry(Some(UserType::Cashier)));
        assert!(row.can_register_payment(Some(UserType::Cashier)));
        assert!(!purchase("realizado", 0.0).can_register_payment(Some(UserType::Administrator)));
        assert!(!purchase("terminado", 0.0).can_register_entry(Some(UserType::Administrator)));
    }

    #[test]
    fn test_stepper_follows_status() {
        let open = purchase("realizado", 300.0).stepper();
        assert_eq!(open.active, 1);
        assert_eq!(open.stages[1].date, "");

        let done = purchase("terminado", 0.0).stepper();
        assert_eq!(done.active, 2);
        assert_eq!(done.stages[1].date, "03-06-2024");
    }
}
