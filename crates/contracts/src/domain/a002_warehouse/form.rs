use super::aggregate::{Warehouse, WarehousePayload, WarehouseStockPayload};
use crate::domain::common::{ADDRESS_RULE as LOCATION_RULE, NAME_RULE};
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FormModel, ValidatedField};
use crate::shared::line_items::{CatalogItem, LineField, LineForm, LineItem, LineItems, PickerScope};

pub const STOCK_FIELDS: [LineField; 3] = [
    LineField::Stock,
    LineField::MinimumStock,
    LineField::MaximumStock,
];

#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseForm {
    pub name: ValidatedField,
    pub location: ValidatedField,
    /// Owning agency id as text (select value); empty until chosen.
    pub agency: String,
    pub lines: LineItems,
}

impl Default for WarehouseForm {
    fn default() -> Self {
        Self {
            name: ValidatedField::new(NAME_RULE),
            location: ValidatedField::new(LOCATION_RULE),
            agency: String::new(),
            lines: LineItems::new(),
        }
    }
}

impl From<&Warehouse> for WarehouseForm {
    fn from(w: &Warehouse) -> Self {
        let lines = w
            .product_stock
            .iter()
            .map(|s| {
                let mut line = LineItem::new(CatalogItem {
                    id: s.product.id(),
                    name: s.product.label(),
                    ..Default::default()
                });
                line.item_id = s.id;
                line.stock.dispatch(FieldAction::Change(s.stock.to_string()));
                line.minimum_stock
                    .dispatch(FieldAction::Change(s.minimum_stock.to_string()));
                line.maximum_stock
                    .dispatch(FieldAction::Change(s.maximum_stock.to_string()));
                line
            })
            .collect();
        Self {
            name: ValidatedField::with_value(NAME_RULE, w.name.clone()),
            location: ValidatedField::with_value(LOCATION_RULE, w.location.clone()),
            agency: w
                .agency
                .as_ref()
                .map(|a| a.id().to_string())
                .unwrap_or_default(),
            lines: LineItems::from_items(lines),
        }
    }
}

impl WarehouseForm {
    pub const SCOPE: PickerScope = PickerScope::Products;

    /// Lines whose minimum exceeds their maximum.
    pub fn inverted_ranges(&self) -> Vec<i64> {
        self.lines
            .items()
            .iter()
            .filter(|l| match (l.minimum_stock.as_f64(), l.maximum_stock.as_f64()) {
                (Some(min), Some(max)) => max > 0.0 && min > max,
                _ => false,
            })
            .map(LineItem::product_id)
            .collect()
    }
}

impl FormModel for WarehouseForm {
    type Payload = WarehousePayload;

    fn is_ready(&self) -> bool {
        all_ready(&[&self.name, &self.location])
            && self.agency.parse::<i64>().is_ok()
            && self.lines.items().iter().all(|l| l.is_ready(&STOCK_FIELDS))
            && self.inverted_ranges().is_empty()
    }

    fn payload(&self) -> WarehousePayload {
        WarehousePayload {
            name: self.name.value.trim().to_string(),
            location: self.location.value.trim().to_string(),
            agency_id: self.agency.parse().unwrap_or_default(),
            product_stock: self
                .lines
                .items()
                .iter()
                .map(|l| WarehouseStockPayload {
                    id: l.item_id,
                    product: l.product_id(),
                    stock: l.stock.value.trim().to_string(),
                    minimum_stock: l.minimum_stock.value.trim().to_string(),
                    maximum_stock: l.maximum_stock.value.trim().to_string(),
                })
                .collect(),
        }
    }

    fn apply_server_errors(&mut self, errors: &FieldErrors) {
        if let Some(message) = errors.first("name") {
            self.name.dispatch(FieldAction::Error(message));
        }
        if let Some(message) = errors.first("location") {
            self.location.dispatch(FieldAction::Error(message));
        }
        self.lines.apply_errors(&errors.items("product_stock"));
    }
}

impl LineForm for WarehouseForm {
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
    use serde_json::json;

    fn filled() -> WarehouseForm {
        let mut form = WarehouseForm::default();
        form.name.dispatch(FieldAction::Change("Almacén Central".into()));
        form.location
            .dispatch(FieldAction::Change("Zona Industrial km 5".into()));
        form.agency = "1".into();
        form.lines.add(CatalogItem {
            id: 9,
            name: "Cemento".into(),
            ..Default::default()
        });
        form.lines.change(9, LineField::Stock, "40".into());
        form.lines.change(9, LineField::MinimumStock, "5".into());
        form.lines.change(9, LineField::MaximumStock, "100".into());
        form
    }

    #[test]
    fn test_payload_shape() {
        let form = filled();
        assert!(form.is_ready());
        assert_eq!(
            serde_json::to_value(form.payload()).expect("serialize"),
            json!({
                "name": "Almacén Central",
                "location": "Zona Industrial km 5",
                "agency_id": 1,
                "product_stock": [
                    {"product": 9, "stock": "40", "minimum_stock": "5", "maximum_stock": "100"}
                ]
            })
        );
    }

    #[test]
    fn test_inverted_stock_range_blocks() {
        let mut form = filled();
        form.lines.change(9, LineField::MinimumStock, "200".into());
        assert_eq!(form.inverted_ranges(), vec![9]);
        assert!(!form.is_ready());
    }

    #[test]
    fn test_stock_errors_map_to_lines() {
        let mut form = filled();
        form.apply_server_errors(&FieldErrors::from_value(json!({
            "product_stock": [{"stock": ["Debe ser mayor a cero."]}]
        })));
        assert_eq!(
            form.lines.items()[0].stock.feedback(),
            Some("Debe ser mayor a cero.")
        );
    }

    #[test]
    fn test_edit_prefills_stock_lines() {
        let warehouse: Warehouse = serde_json::from_value(json!({
            "id": 3, "name": "Depósito", "location": "Calle Murillo 1020",
            "agency": {"id": 2, "name": "Sucursal Sur"},
            "product_stock": [{"id": 12, "product": {"id": 5, "name": "Yeso"}, "stock": "10.00",
                               "minimum_stock": 1, "maximum_stock": 50}]
        }))
        .expect("parse");
        let form = WarehouseForm::from(&warehouse);
        assert_eq!(form.agency, "2");
        assert_eq!(form.lines.items()[0].stock.value, "10");
        assert!(form.is_ready());
        assert_eq!(form.payload().product_stock[0].id, Some(12));
    }
}
