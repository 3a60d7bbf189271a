use super::aggregate::{OutputItemPayload, OutputPayload};
use crate::domain::a011_sale::aggregate::Sale;
use crate::domain::common::TODAY_RULE;
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FormModel, ValidatedField};
use crate::shared::line_items::{LineField, LineForm, LineItems, PickerScope};

/// Dispatch of the goods of a performed sale.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputForm {
    pub sale: i64,
    pub agency: i64,
    pub client: String,
    pub output_date: ValidatedField,
    pub lines: LineItems,
}

impl OutputForm {
    pub fn new(sale: i64, agency: i64) -> Self {
        Self {
            sale,
            agency,
            client: String::new(),
            output_date: ValidatedField::new(TODAY_RULE),
            lines: LineItems::new(),
        }
    }

    pub fn for_sale(sale: &Sale, agency: i64) -> Self {
        Self {
            client: sale
                .clients
                .as_ref()
                .map(|c| c.id().to_string())
                .unwrap_or_default(),
            ..Self::new(sale.id, agency)
        }
    }

    pub fn scope(&self) -> PickerScope {
        PickerScope::Sale {
            sale: self.sale,
            agency: self.agency,
        }
    }
}

impl FormModel for OutputForm {
    type Payload = OutputPayload;

    fn is_ready(&self) -> bool {
        all_ready(&[&self.output_date])
            && self.client.parse::<i64>().is_ok()
            && self.lines.is_ready(&[LineField::Quantity])
    }

    fn payload(&self) -> OutputPayload {
        OutputPayload {
            client: self.client.parse().unwrap_or_default(),
            output_date: self.output_date.value.trim().to_string(),
            output_items: self
                .lines
                .items()
                .iter()
                .map(|l| OutputItemPayload {
                    sale_item: l.product.sale_item_id,
                    product_stock: l.product_id(),
                    quantity: l.quantity.value.trim().to_string(),
                })
                .collect(),
        }
    }

    fn apply_server_errors(&mut self, errors: &FieldErrors) {
        if let Some(message) = errors.first("output_date") {
            self.output_date.dispatch(FieldAction::Error(message));
        }
        self.lines.apply_errors(&errors.items("output_items"));
    }
}

impl LineForm for OutputForm {
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
    use crate::domain::a013_output::aggregate::Output;
    use crate::domain::common::ListRow;
    use crate::shared::line_items::CatalogItem;
    use serde_json::json;

    fn sale() -> Sale {
        serde_json::from_value(json!({
            "id": 40,
            "clients": {"id": 8, "name": "Constructora Illimani"},
            "sale_date": "2024-07-01",
            "status": "realizado"
        }))
        .expect("parse")
    }

    #[test]
    fn test_output_payload_references_sale_items() {
        let mut form = OutputForm::for_sale(&sale(), 1);
        assert_eq!(form.scope(), PickerScope::Sale { sale: 40, agency: 1 });
        form.output_date.dispatch(FieldAction::Change(
            chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
        ));
        form.lines.add(CatalogItem {
            id: 55,
            name: "Pintura látex".into(),
            sale_item_id: Some(77),
            ..Default::default()
        });
        form.lines.change(55, LineField::Quantity, "2".into());
        assert!(form.is_ready());

        let body = serde_json::to_value(form.payload()).expect("serialize");
        assert_eq!(body["client"], json!(8));
        assert_eq!(
            body["output_items"],
            json!([{"sale_item": 77, "product_stock": 55, "quantity": "2"}])
        );
    }

    #[test]
    fn test_output_row() {
        let output: Output = serde_json::from_value(json!({
            "id": 3,
            "clients": {"id": 8, "name": "Constructora Illimani"},
            "output_date": "2024-07-03",
            "note": null,
            "output_items": [{
                "products_stock": {"products": {"name": "Pintura látex", "code": "PL-1"},
                                   "warehouses": {"id": 1, "name": "Central"}},
                "quantity": "2.00"
            }]
        }))
        .expect("parse");
        assert_eq!(output.cells(), vec!["Constructora Illimani", "03-07-2024", "-"]);
        assert_eq!(output.output_items[0].products_stock.warehouse_name(), "Central");
        assert_eq!(output.pdf_path(), "/api/sale/output-pdf/3/");
    }
}
