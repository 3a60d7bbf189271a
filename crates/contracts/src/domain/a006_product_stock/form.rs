use super::aggregate::{DamagedStockPayload, ProductStock};
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FieldRule, FormModel, ValidatedField};
use crate::shared::validation::validate_quantity;

pub const QUANTITY_RULE: FieldRule = FieldRule::new(validate_quantity, "Ingrese número válido");
pub const EXCEEDS_AVAILABLE: &str = "La cantidad supera el stock disponible.";

/// Moves units of a product stock into the damaged bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct DamagedStockForm {
    pub quantity: ValidatedField,
    pub available: f64,
}

impl Default for DamagedStockForm {
    fn default() -> Self {
        Self {
            quantity: ValidatedField::new(QUANTITY_RULE),
            available: 0.0,
        }
    }
}

impl From<&ProductStock> for DamagedStockForm {
    fn from(stock: &ProductStock) -> Self {
        Self {
            quantity: ValidatedField::new(QUANTITY_RULE),
            available: stock.available_stock,
        }
    }
}

impl DamagedStockForm {
    /// Revalidates against the available stock after the basic rule.
    pub fn change_quantity(&mut self, value: String) {
        self.quantity.dispatch(FieldAction::Change(value));
        if self.quantity.is_valid() && self.exceeds_available() {
            self.quantity
                .dispatch(FieldAction::Error(EXCEEDS_AVAILABLE.to_string()));
        }
    }

    fn exceeds_available(&self) -> bool {
        self.quantity.as_f64().is_some_and(|q| q > self.available)
    }
}

impl FormModel for DamagedStockForm {
    type Payload = DamagedStockPayload;

    fn is_ready(&self) -> bool {
        all_ready(&[&self.quantity]) && !self.exceeds_available()
    }

    fn payload(&self) -> DamagedStockPayload {
        DamagedStockPayload {
            quantity: self.quantity.value.trim().to_string(),
        }
    }

    fn apply_server_errors(&mut self, errors: &FieldErrors) {
        if let Some(message) = errors.first("quantity") {
            self.quantity.dispatch(FieldAction::Error(message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ListRow;
    use serde_json::json;

    fn stock() -> ProductStock {
        serde_json::from_value(json!({
            "id": 4,
            "products": {"name": "Cemento", "code": "CEM"},
            "warehouses": {"id": 1, "name": "Central"},
            "stock": "30.00", "available_stock": "25.00", "damaged_stock": "0.00",
            "minimum_stock": 5, "maximum_stock": 100
        }))
        .expect("parse")
    }

    #[test]
    fn test_row_cells() {
        let row = stock();
        assert_eq!(
            row.cells(),
            vec!["CEM", "Cemento", "Central", "30", "25", "0", "5", "100"]
        );
    }

    #[test]
    fn test_quantity_bounded_by_available() {
        let mut form = DamagedStockForm::from(&stock());
        form.change_quantity("26".into());
        assert_eq!(form.quantity.feedback(), Some(EXCEEDS_AVAILABLE));
        assert!(!form.is_ready());

        form.change_quantity("25".into());
        assert!(form.is_ready());
        assert_eq!(form.payload().quantity, "25");
    }

    #[test]
    fn test_zero_is_rejected() {
        let mut form = DamagedStockForm::from(&stock());
        form.change_quantity("0".into());
        assert!(!form.quantity.is_valid());
    }
}
