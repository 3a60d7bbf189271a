use super::aggregate::{Sale, SaleItemPayload, SalePayload};
use crate::domain::a014_payment::aggregate::TransactionType;
use crate::domain::a014_payment::form::{PaymentHolder, PaymentSection};
use crate::domain::common::document::DocumentStatus;
use crate::domain::common::TODAY_RULE;
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FormModel, ValidatedField};
use crate::shared::line_items::{CatalogItem, LineField, LineForm, LineItem, LineItems, PickerScope};
use crate::shared::number::format_quantity;

pub const LINE_FIELDS: [LineField; 2] = [LineField::Quantity, LineField::Price];

/// What submitting the form does to the sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleMode {
    /// New proforma.
    Proforma,
    /// Changes to a proforma that stays a proforma.
    Edit,
    /// Turns a proforma into a performed sale.
    Perform,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaleForm {
    pub mode: SaleMode,
    pub agency: i64,
    /// Client id from the autocomplete; empty until chosen.
    pub client: String,
    /// Selling channel id; the product picker needs it.
    pub selling_channel: String,
    pub sale_date: ValidatedField,
    pub sale_perform_date: ValidatedField,
    /// `contado` or `credito`; only asked when performing.
    pub sale_type: String,
    pub lines: LineItems,
    pub payment: PaymentSection,
}

impl SaleForm {
    pub fn new(agency: i64) -> Self {
        Self {
            mode: SaleMode::Proforma,
            agency,
            client: String::new(),
            selling_channel: String::new(),
            sale_date: ValidatedField::new(TODAY_RULE),
            sale_perform_date: ValidatedField::new(TODAY_RULE),
            sale_type: String::new(),
            lines: LineItems::new(),
            payment: PaymentSection::default(),
        }
    }

    /// Prefills from a saved proforma.
    pub fn from_sale(sale: &Sale, agency: i64, perform: bool) -> Self {
        let lines = sale
            .sale_items
            .iter()
            .map(|item| {
                let product = item.product();
                let mut line = LineItem::new(CatalogItem {
                    id: product.id,
                    name: product.name,
                    code: product.code,
                    price: Some(item.unit_price),
                    stock: product.available_stock,
                    minimum_sale_price: product.minimum_sale_price,
                    maximum_sale_price: product.maximum_sale_price,
                    sale_item_id: item.id,
                    ..Default::default()
                });
                line.item_id = item.id;
                line.dispatch(
                    LineField::Quantity,
                    FieldAction::Change(format_quantity(item.quantity)),
                );
                line.dispatch(
                    LineField::Discount,
                    FieldAction::Change(format_quantity(item.discount)),
                );
                line
            })
            .collect();
        let mut form = Self::new(agency);
        form.mode = if perform {
            SaleMode::Perform
        } else {
            SaleMode::Edit
        };
        form.client = sale
            .clients
            .as_ref()
            .map(|c| c.id().to_string())
            .unwrap_or_default();
        form.selling_channel = sale
            .selling_channels
            .as_ref()
            .map(|c| c.id().to_string())
            .unwrap_or_default();
        form.sale_date = ValidatedField::saved(TODAY_RULE, sale.sale_date.clone());
        form.lines = LineItems::from_items(lines);
        form
    }

    pub fn is_perform(&self) -> bool {
        self.mode == SaleMode::Perform
    }

    pub fn is_cash(&self) -> bool {
        self.is_perform() && self.sale_type == "contado"
    }

    /// Products are priced per channel, so nothing can be picked before one
    /// is chosen.
    pub fn scope(&self) -> Option<PickerScope> {
        self.selling_channel
            .parse()
            .ok()
            .map(|selling_channel| PickerScope::SellingChannel { selling_channel })
    }

    pub fn total(&self) -> f64 {
        self.lines.grand_total()
    }

    pub fn change_payment_amount(&mut self, value: String) {
        let cash_total = self.is_cash().then(|| self.total());
        self.payment.change_amount(value, cash_total);
    }

    fn payment_ready(&self) -> bool {
        if !self.is_perform() {
            return true;
        }
        if self.is_cash() {
            return self.payment.is_complete() && !self.payment.falls_short(self.total());
        }
        self.payment.is_blank() || self.payment.is_complete()
    }
}

impl FormModel for SaleForm {
    type Payload = SalePayload;

    fn is_ready(&self) -> bool {
        let perform_ready = !self.is_perform()
            || (all_ready(&[&self.sale_perform_date]) && !self.sale_type.is_empty());
        all_ready(&[&self.sale_date])
            && self.client.parse::<i64>().is_ok()
            && self.selling_channel.parse::<i64>().is_ok()
            && self.lines.is_ready(&LINE_FIELDS)
            && perform_ready
            && self.payment_ready()
    }

    fn payload(&self) -> SalePayload {
        let total = self.total();
        let perform = self.is_perform();
        SalePayload {
            agency: self.agency,
            client: self.client.parse().unwrap_or_default(),
            selling_channel: self.selling_channel.parse().unwrap_or_default(),
            sale_date: self.sale_date.value.trim().to_string(),
            sale_perform_date: perform.then(|| self.sale_perform_date.value.trim().to_string()),
            sale_type: if perform {
                self.sale_type.clone()
            } else {
                "proforma".to_string()
            },
            status: if perform {
                DocumentStatus::Realizado
            } else {
                DocumentStatus::Proforma
            },
            total,
            balance_due: if perform { total } else { 0.0 },
            sale_items: self
                .lines
                .items()
                .iter()
                .map(|l| SaleItemPayload {
                    id: l.item_id,
                    product: l.product_id(),
                    quantity: l.quantity.value.trim().to_string(),
                    unit_price: l.price.value.trim().to_string(),
                    sub_total_price: l.sub_total().unwrap_or_default(),
                    discount: l.discount.value.trim().to_string(),
                    total_price: l.total().unwrap_or_default(),
                })
                .collect(),
            payments: (perform && self.payment.is_complete())
                .then(|| self.payment.to_payload(TransactionType::Venta)),
        }
    }

    fn apply_server_errors(&mut self, errors: &FieldErrors) {
        if let Some(message) = errors.first("sale_date") {
            self.sale_date.dispatch(FieldAction::Error(message));
        }
        if let Some(message) = errors.first("sale_perform_date") {
            self.sale_perform_date.dispatch(FieldAction::Error(message));
        }
        self.payment.apply_errors(&errors.nested("payments"));
        self.lines.apply_errors(&errors.items("sale_items"));
    }
}

impl LineForm for SaleForm {
    fn lines(&self) -> &LineItems {
        &self.lines
    }

    fn lines_mut(&mut self) -> &mut LineItems {
        &mut self.lines
    }
}

impl PaymentHolder for SaleForm {
    fn payment(&self) -> &PaymentSection {
        &self.payment
    }

    fn payment_mut(&mut self) -> &mut PaymentSection {
        &mut self.payment
    }

    fn change_payment_amount(&mut self, value: String) {
        SaleForm::change_payment_amount(self, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ListRow;
    use crate::system::auth::UserType;
    use serde_json::json;

    fn today() -> String {
        chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
    }

    fn proforma() -> SaleForm {
        let mut form = SaleForm::new(1);
        form.client = "8".into();
        form.selling_channel = "2".into();
        form.sale_date.dispatch(FieldAction::Change(today()));
        form.lines.add(CatalogItem {
            id: 14,
            name: "Pintura látex".into(),
            price: Some(50.0),
            stock: Some(20.0),
            minimum_sale_price: Some(45.0),
            maximum_sale_price: Some(55.0),
            ..Default::default()
        });
        form.lines.change(14, LineField::Quantity, "3".into());
        form.lines.change(14, LineField::Discount, "10".into());
        form
    }

    #[test]
    fn test_picker_waits_for_channel() {
        let mut form = SaleForm::new(1);
        assert_eq!(form.scope(), None);
        form.selling_channel = "2".into();
        assert_eq!(
            form.scope(),
            Some(PickerScope::SellingChannel { selling_channel: 2 })
        );
    }

    #[test]
    fn test_proforma_payload() {
        let form = proforma();
        assert!(form.is_ready());
        let body = serde_json::to_value(form.payload()).expect("serialize");
        assert_eq!(body["sale_type"], json!("proforma"));
        assert_eq!(body["status"], json!("proforma"));
        assert_eq!(body["balance_due"], json!(0.0));
        assert_eq!(body["sale_perform_date"], json!(null));
        assert_eq!(body["total"], json!(135.0));
        assert_eq!(
            body["sale_items"],
            json!([{
                "product": 14, "quantity": "3", "unit_price": "50",
                "sub_total_price": 150.0, "discount": "10", "total_price": 135.0
            }])
        );
        assert!(body.get("payments").is_none());
    }

    fn saved() -> Sale {
        serde_json::from_value(json!({
            "id": 40,
            "seller": {"first_name": "Luis", "last_name": "Mamani"},
            "clients": {"id": 8, "name": "Constructora Illimani"},
            "selling_channels": {"id": 2, "name": "Mayoristas"},
            "sale_type": "proforma",
            "sale_date": today(),
            "status": "proforma",
            "total": "135.00",
            "balance_due": "0.00",
            "sale_items": [{
                "id": 77,
                "products": {"id": 14, "name": "Pintura látex", "code": "PL-1", "available_stock": "20"},
                "quantity": "3.00", "unit_price": "50.00", "sub_total_price": "150.00",
                "discount": "10.00", "total_price": "135.00"
            }],
            "payments": []
        }))
        .expect("parse")
    }

    #[test]
    fn test_older_proforma_stays_editable_after_date_blur() {
        let mut sale = saved();
        sale.sale_date = "2024-07-01".into();
        let mut form = SaleForm::from_sale(&sale, 1, false);
        assert!(form.is_ready());

        form.sale_date.dispatch(FieldAction::Focus);
        assert!(form.sale_date.is_valid());
        assert!(form.is_ready());

        form.sale_date.dispatch(FieldAction::Change("2024-07-02".into()));
        assert_eq!(
            form.sale_date.feedback(),
            Some("La fecha no puede ser anterior ni posterior a la actual")
        );
    }

    #[test]
    fn test_perform_credit_sale_without_payment() {
        let mut form = SaleForm::from_sale(&saved(), 1, true);
        assert!(!form.is_ready());
        form.sale_perform_date.dispatch(FieldAction::Change(today()));
        form.sale_type = "credito".into();
        assert!(form.is_ready());

        let body = serde_json::to_value(form.payload()).expect("serialize");
        assert_eq!(body["status"], json!("realizado"));
        assert_eq!(body["balance_due"], json!(135.0));
        assert_eq!(body["sale_items"][0]["id"], json!(77));
        assert!(body.get("payments").is_none());
    }

    #[test]
    fn test_cash_sale_needs_full_payment() {
        let mut form = SaleForm::from_sale(&saved(), 1, true);
        form.sale_perform_date.dispatch(FieldAction::Change(today()));
        form.sale_type = "contado".into();
        assert!(!form.is_ready());

        form.payment.payment_method = "tarjeta".into();
        form.payment.payment_date.dispatch(FieldAction::Change(today()));
        form.change_payment_amount("100".into());
        assert!(!form.payment.amount.is_valid());

        form.change_payment_amount("135".into());
        assert!(form.is_ready());
        let body = serde_json::to_value(form.payload()).expect("serialize");
        assert_eq!(body["payments"]["transaction_type"], json!("venta"));
    }

    #[test]
    fn test_half_filled_payment_blocks_credit_sale() {
        let mut form = SaleForm::from_sale(&saved(), 1, true);
        form.sale_perform_date.dispatch(FieldAction::Change(today()));
        form.sale_type = "credito".into();
        form.payment.payment_method = "qr".into();
        assert!(!form.is_ready());
    }

    #[test]
    fn test_stock_error_lands_on_line() {
        let mut form = proforma();
        form.apply_server_errors(&FieldErrors::from_value(json!({
            "sale_items": [{"quantity": ["Stock insuficiente."]}]
        })));
        assert_eq!(form.lines.items()[0].quantity.feedback(), Some("Stock insuficiente."));
        assert!(!form.is_ready());
    }

    #[test]
    fn test_row_actions_and_stepper() {
        let mut sale = saved();
        assert_eq!(sale.cells()[2], "Proforma");
        assert!(sale.is_editable());
        assert!(!sale.can_register_output(Some(UserType::Administrator)));
        assert_eq!(sale.stepper().active, 1);

        sale.status = DocumentStatus::Realizado;
        sale.sale_type = "credito".into();
        sale.balance_due = 135.0;
        sale.sale_perform_date = Some("2024-07-02".into());
        assert_eq!(sale.cells()[2], "Crédito");
        assert!(!sale.is_editable());
        assert!(sale.can_register_output(Some(UserType::Warehouse)));
        assert!(sale.can_register_payment(Some(UserType::Cashier)));
        assert!(!sale.can_register_payment(Some(UserType::Seller)));
        let stepper = sale.stepper();
        assert_eq!(stepper.active, 2);
        assert_eq!(stepper.stages[1].date, "02-07-2024");
        assert_eq!(stepper.stages[2].date, "");
    }
}
