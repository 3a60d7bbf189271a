use super::aggregate::{Product, ProductPayload};
use crate::domain::common::{CODE_RULE, NAME_RULE, NUMBER_RULE};
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FieldRule, FormModel, ValidatedField};
use crate::shared::number::format_quantity;
use crate::shared::validation::validate_unit_of_measurement;

pub const UNIT_RULE: FieldRule = FieldRule::new(
    validate_unit_of_measurement,
    "Ingrese una unidad de medida válida.",
);

pub const STOCK_RANGE_ERROR: &str = "El stock mínimo no puede superar al máximo.";
pub const PRICE_RANGE_ERROR: &str = "El precio mínimo no puede superar al máximo.";

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    /// Batch id from the autocomplete; empty until chosen.
    pub batch: String,
    pub name: ValidatedField,
    pub code: ValidatedField,
    pub description: String,
    pub stock: ValidatedField,
    pub minimum_stock: ValidatedField,
    pub maximum_stock: ValidatedField,
    pub minimum_sale_price: ValidatedField,
    pub maximum_sale_price: ValidatedField,
    pub unit_of_measurement: ValidatedField,
    /// Picture already stored on the server (edit mode).
    pub existing_image: Option<String>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            batch: String::new(),
            name: ValidatedField::new(NAME_RULE),
            code: ValidatedField::new(CODE_RULE),
            description: String::new(),
            stock: ValidatedField::new(NUMBER_RULE),
            minimum_stock: ValidatedField::new(NUMBER_RULE),
            maximum_stock: ValidatedField::new(NUMBER_RULE),
            minimum_sale_price: ValidatedField::new(NUMBER_RULE),
            maximum_sale_price: ValidatedField::new(NUMBER_RULE),
            unit_of_measurement: ValidatedField::new(UNIT_RULE),
            existing_image: None,
        }
    }
}

impl From<&Product> for ProductForm {
    fn from(p: &Product) -> Self {
        let number = |v: f64| ValidatedField::with_value(NUMBER_RULE, format_quantity(v));
        Self {
            batch: p.batch.as_ref().map(|b| b.id().to_string()).unwrap_or_default(),
            name: ValidatedField::with_value(NAME_RULE, p.name.clone()),
            code: ValidatedField::with_value(CODE_RULE, p.code.clone()),
            description: p.description.clone(),
            stock: number(p.stock),
            minimum_stock: number(p.minimum_stock),
            maximum_stock: number(p.maximum_stock),
            minimum_sale_price: number(p.minimum_sale_price),
            maximum_sale_price: number(p.maximum_sale_price),
            unit_of_measurement: ValidatedField::with_value(UNIT_RULE, p.unit_of_measurement.clone()),
            existing_image: p.image.clone(),
        }
    }
}

impl ProductForm {
    fn numbers(&self) -> [&ValidatedField; 5] {
        [
            &self.stock,
            &self.minimum_stock,
            &self.maximum_stock,
            &self.minimum_sale_price,
            &self.maximum_sale_price,
        ]
    }

    /// First inverted min/max pair, if any.
    pub fn range_error(&self) -> Option<&'static str> {
        let inverted = |min: &ValidatedField, max: &ValidatedField| {
            matches!((min.as_f64(), max.as_f64()), (Some(a), Some(b)) if a > b)
        };
        if inverted(&self.minimum_stock, &self.maximum_stock) {
            Some(STOCK_RANGE_ERROR)
        } else if inverted(&self.minimum_sale_price, &self.maximum_sale_price) {
            Some(PRICE_RANGE_ERROR)
        } else {
            None
        }
    }
}

impl FormModel for ProductForm {
    type Payload = ProductPayload;

    fn is_ready(&self) -> bool {
        let mut required = vec![&self.name, &self.code, &self.unit_of_measurement];
        required.extend(self.numbers());
        all_ready(&required) && !self.batch.is_empty() && self.range_error().is_none()
    }

    fn payload(&self) -> ProductPayload {
        let text = |f: &ValidatedField| f.value.trim().to_string();
        ProductPayload {
            batch_id: self.batch.clone(),
            name: text(&self.name),
            stock: text(&self.stock),
            code: text(&self.code),
            description: self.description.trim().to_string(),
            minimum_stock: text(&self.minimum_stock),
            maximum_stock: text(&self.maximum_stock),
            minimum_sale_price: text(&self.minimum_sale_price),
            maximum_sale_price: text(&self.maximum_sale_price),
            unit_of_measurement: text(&self.unit_of_measurement),
        }
    }

    fn apply_server_errors(&mut self, errors: &FieldErrors) {
        let fields: [(&str, &mut ValidatedField); 8] = [
            ("name", &mut self.name),
            ("code", &mut self.code),
            ("stock", &mut self.stock),
            ("minimum_stock", &mut self.minimum_stock),
            ("maximum_stock", &mut self.maximum_stock),
            ("minimum_sale_price", &mut self.minimum_sale_price),
            ("maximum_sale_price", &mut self.maximum_sale_price),
            ("unit_of_measurement", &mut self.unit_of_measurement),
        ];
        for (key, field) in fields {
            if let Some(message) = errors.first(key) {
                field.dispatch(FieldAction::Error(message));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> ProductForm {
        let mut form = ProductForm::default();
        form.batch = "2".into();
        let set = |f: &mut ValidatedField, v: &str| f.dispatch(FieldAction::Change(v.into()));
        set(&mut form.name, "Cemento Portland");
        set(&mut form.code, "CEM-001");
        set(&mut form.stock, "0");
        set(&mut form.minimum_stock, "10");
        set(&mut form.maximum_stock, "500");
        set(&mut form.minimum_sale_price, "45");
        set(&mut form.maximum_sale_price, "52.5");
        set(&mut form.unit_of_measurement, "bolsa");
        form
    }

    #[test]
    fn test_ready_and_multipart_parts() {
        let form = filled();
        assert!(form.is_ready());
        let payload = form.payload();
        let parts = payload.parts();
        assert_eq!(parts[0], ("batch_id", "2"));
        assert!(parts.contains(&("code", "CEM-001")));
        assert!(parts.contains(&("description", "")));
        assert_eq!(parts.len(), 10);
    }

    #[test]
    fn test_code_with_spaces_is_invalid() {
        let mut form = filled();
        form.code.dispatch(FieldAction::Change("CEM 001".into()));
        assert_eq!(form.code.feedback(), Some("Ingrese código válido"));
        assert!(!form.is_ready());
    }

    #[test]
    fn test_inverted_price_range_blocks() {
        let mut form = filled();
        form.minimum_sale_price.dispatch(FieldAction::Change("60".into()));
        assert_eq!(form.range_error(), Some(PRICE_RANGE_ERROR));
        assert!(!form.is_ready());
    }

    #[test]
    fn test_duplicate_code_from_server() {
        let mut form = filled();
        form.apply_server_errors(&FieldErrors::from_value(json!({
            "code": ["product with this code already exists."]
        })));
        assert!(!form.code.is_valid());
        assert!(form.name.is_valid());
    }

    #[test]
    fn test_edit_prefill_keeps_image() {
        let product: Product = serde_json::from_value(json!({
            "id": 8, "name": "Yeso fino", "code": "YES-2", "description": "",
            "image": "http://localhost:8000/media/yeso.png",
            "batch": {"id": 3, "name": "Yesos"}, "stock": "12.00",
            "minimum_stock": "1.00", "maximum_stock": "90.00",
            "minimum_sale_price": "20.00", "maximum_sale_price": "25.50",
            "unit_of_measurement": "kg"
        }))
        .expect("parse");
        let form = ProductForm::from(&product);
        assert_eq!(form.stock.value, "12");
        assert_eq!(form.maximum_sale_price.value, "25.50");
        assert_eq!(form.existing_image.as_deref(), Some("http://localhost:8000/media/yeso.png"));
        assert!(form.is_ready());
    }
}
