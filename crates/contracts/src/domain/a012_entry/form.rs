use super::aggregate::{EntryItemPayload, EntryPayload};
use crate::domain::a010_purchase::aggregate::Purchase;
use crate::domain::a010_purchase::form::INVOICE_RULE;
use crate::domain::common::TODAY_RULE;
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FormModel, ValidatedField};
use crate::shared::line_items::{LineField, LineForm, LineItems, PickerScope};

/// Receipt of goods from a purchase into the selected agency.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub purchase: i64,
    pub agency: i64,
    pub supplier: String,
    pub entry_date: ValidatedField,
    pub invoice_number: ValidatedField,
    pub lines: LineItems,
}

impl EntryForm {
    /// Blank entry while the purchase loads.
    pub fn new(purchase: i64, agency: i64) -> Self {
        Self {
            purchase,
            agency,
            supplier: String::new(),
            entry_date: ValidatedField::new(TODAY_RULE),
            invoice_number: ValidatedField::new(INVOICE_RULE),
            lines: LineItems::new(),
        }
    }

    /// Supplier and invoice come from the purchase being received.
    pub fn for_purchase(purchase: &Purchase, agency: i64) -> Self {
        Self {
            supplier: purchase
                .suppliers
                .as_ref()
                .map(|s| s.id().to_string())
                .unwrap_or_default(),
            invoice_number: ValidatedField::with_value(
                INVOICE_RULE,
                purchase.invoice_number.clone(),
            ),
            ..Self::new(purchase.id, agency)
        }
    }

    pub fn scope(&self) -> PickerScope {
        PickerScope::Purchase {
            purchase: self.purchase,
            agency: self.agency,
        }
    }
}

impl FormModel for EntryForm {
    type Payload = EntryPayload;

    fn is_ready(&self) -> bool {
        all_ready(&[&self.entry_date, &self.invoice_number])
            && self.supplier.parse::<i64>().is_ok()
            && self.lines.is_ready(&[LineField::Quantity])
    }

    fn payload(&self) -> EntryPayload {
        EntryPayload {
            purchase: self.purchase,
            agency: self.agency,
            supplier: self.supplier.parse().unwrap_or_default(),
            entry_date: self.entry_date.value.trim().to_string(),
            invoice_number: self.invoice_number.value.trim().to_string(),
            entry_items: self
                .lines
                .items()
                .iter()
                .map(|l| EntryItemPayload {
                    purchase_item: l.product.purchase_item_id,
                    product_stock: l.product_id(),
                    quantity: l.quantity.value.trim().to_string(),
                })
                .collect(),
        }
    }

    fn apply_server_errors(&mut self, errors: &FieldErrors) {
        if let Some(message) = errors.first("entry_date") {
            self.entry_date.dispatch(FieldAction::Error(message));
        }
        if let Some(message) = errors.first("invoice_number") {
            self.invoice_number.dispatch(FieldAction::Error(message));
        }
        self.lines.apply_errors(&errors.items("entry_items"));
    }
}

impl LineForm for EntryForm {
    fn lines(&self) -> &LineItems {
        &self.lines
    }

    fn lines_mut(&mut self) -> &mut LineItems {
        &mut self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::line_items::CatalogItem;
    use serde_json::json;

    fn purchase() -> Purchase {
        serde_json::from_value(json!({
            "id": 9,
            "suppliers": {"id": 6, "name": "Ferretería Andina"},
            "purchase_date": "2024-06-01",
            "invoice_number": 1045,
            "status": "realizado"
        }))
        .expect("parse")
    }

    #[test]
    fn test_entry_carries_purchase_items() {
        let mut form = EntryForm::for_purchase(&purchase(), 2);
        assert_eq!(form.scope(), PickerScope::Purchase { purchase: 9, agency: 2 });
        form.entry_date.dispatch(FieldAction::Change(
            chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
        ));
        assert!(!form.is_ready());

        form.lines.add(CatalogItem {
            id: 31,
            name: "Cemento".into(),
            purchase_item_id: Some(120),
            ..Default::default()
        });
        form.lines.change(31, LineField::Quantity, "6".into());
        assert!(form.is_ready());

        let body = serde_json::to_value(form.payload()).expect("serialize");
        assert_eq!(body["supplier"], json!(6));
        assert_eq!(body["invoice_number"], json!("1045"));
        assert_eq!(
            body["entry_items"],
            json!([{"purchase_item": 120, "product_stock": 31, "quantity": "6"}])
        );
    }

    #[test]
    fn test_over_delivery_error_from_server() {
        let mut form = EntryForm::for_purchase(&purchase(), 2);
        form.lines.add(CatalogItem {
            id: 31,
            name: "Cemento".into(),
            ..Default::default()
        });
        form.apply_server_errors(&FieldErrors::from_value(json!({
            "entry_items": [{"quantity": ["Supera la cantidad comprada."]}]
        })));
        assert_eq!(
            form.lines.items()[0].quantity.feedback(),
            Some("Supera la cantidad comprada.")
        );
    }
}
