//! Product picker rows and the line items a document accumulates from them.

use serde::{Deserialize, Serialize};

use super::endpoints;
use super::form::{FieldAction, FieldErrors, FieldRule, ValidatedField};
use super::number::{flexible_opt, round2};
use super::validation::{
    validate_optional_date, validate_percentage, validate_positive_number, validate_quantity,
};

/// Row returned by the catalog (or the products list in the plain scope).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, deserialize_with = "flexible_opt")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "flexible_opt")]
    pub stock: Option<f64>,
    #[serde(default, deserialize_with = "flexible_opt")]
    pub reserved_stock: Option<f64>,
    #[serde(default, deserialize_with = "flexible_opt")]
    pub minimum_sale_price: Option<f64>,
    #[serde(default, deserialize_with = "flexible_opt")]
    pub maximum_sale_price: Option<f64>,
    #[serde(default)]
    pub purchase_item_id: Option<i64>,
    #[serde(default)]
    pub sale_item_id: Option<i64>,
}

/// Where the picker draws its rows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerScope {
    /// Plain product list (suppliers, warehouses).
    Products,
    /// Products priced for a selling channel.
    SellingChannel { selling_channel: i64 },
    /// Items of a purchase still to be received (entries).
    Purchase { purchase: i64, agency: i64 },
    /// Items of a sale still to be dispatched (outputs).
    Sale { sale: i64, agency: i64 },
    /// Stock held by the agency (new purchases and sales).
    Agency { agency: i64 },
}

impl PickerScope {
    pub fn endpoint(&self) -> &'static str {
        match self {
            PickerScope::Products => endpoints::PRODUCTS,
            _ => endpoints::CATALOG,
        }
    }

    /// The plain product list is paginated (`{total, rows}`); the catalog
    /// returns a bare array.
    pub fn is_paginated(&self) -> bool {
        matches!(self, PickerScope::Products)
    }

    pub fn query(&self, search: &str) -> Vec<(&'static str, String)> {
        let mut pairs = match *self {
            PickerScope::Products => Vec::new(),
            PickerScope::SellingChannel { selling_channel } => {
                vec![("selling_channel_id", selling_channel.to_string())]
            }
            PickerScope::Purchase { purchase, agency } => vec![
                ("purchase_id", purchase.to_string()),
                ("agency_id", agency.to_string()),
            ],
            PickerScope::Sale { sale, agency } => vec![
                ("sale_id", sale.to_string()),
                ("agency_id", agency.to_string()),
            ],
            PickerScope::Agency { agency } => vec![("agency_id", agency.to_string())],
        };
        let search = search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }

    /// Channel pricing only offers products that have a sale price range and
    /// stock on hand.
    pub fn keep(&self, item: &CatalogItem) -> bool {
        match self {
            PickerScope::SellingChannel { .. } => {
                item.minimum_sale_price.unwrap_or_default() > 0.0
                    && item.maximum_sale_price.unwrap_or_default() > 0.0
                    && item.stock.unwrap_or_default() > 0.0
            }
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineField {
    Quantity,
    Price,
    Discount,
    Stock,
    MinimumStock,
    MaximumStock,
    StartDate,
    EndDate,
}

impl LineField {
    /// Keys the server may use for this column inside a nested item error.
    fn wire_names(&self) -> &'static [&'static str] {
        match self {
            LineField::Quantity => &["quantity"],
            LineField::Price => &["unit_price", "price"],
            LineField::Discount => &["discount"],
            LineField::Stock => &["stock"],
            LineField::MinimumStock => &["minimum_stock"],
            LineField::MaximumStock => &["maximum_stock"],
            LineField::StartDate => &["start_date"],
            LineField::EndDate => &["end_date"],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LineField::Quantity => "Cantidad",
            LineField::Price => "Precio",
            LineField::Discount => "Descuento (%)",
            LineField::Stock => "Stock",
            LineField::MinimumStock => "Stock mínimo",
            LineField::MaximumStock => "Stock máximo",
            LineField::StartDate => "Fecha inicio",
            LineField::EndDate => "Fecha fin",
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, LineField::StartDate | LineField::EndDate)
    }

    const ALL: [LineField; 8] = [
        LineField::Quantity,
        LineField::Price,
        LineField::Discount,
        LineField::Stock,
        LineField::MinimumStock,
        LineField::MaximumStock,
        LineField::StartDate,
        LineField::EndDate,
    ];
}

const NUMBER_FEEDBACK: &str = "Ingrese un número válido.";
const QUANTITY_RULE: FieldRule = FieldRule::new(validate_quantity, NUMBER_FEEDBACK);
const AMOUNT_RULE: FieldRule = FieldRule::new(validate_positive_number, NUMBER_FEEDBACK);
const DISCOUNT_RULE: FieldRule = FieldRule::new(validate_percentage, "Ingrese un porcentaje válido.");
const DATE_RULE: FieldRule =
    FieldRule::new(validate_optional_date, "Ingrese una fecha válida o deje vacío");

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product: CatalogItem,
    /// Server id of an existing row (editing a saved document).
    pub item_id: Option<i64>,
    pub quantity: ValidatedField,
    pub price: ValidatedField,
    pub discount: ValidatedField,
    pub stock: ValidatedField,
    pub minimum_stock: ValidatedField,
    pub maximum_stock: ValidatedField,
    pub start_date: ValidatedField,
    pub end_date: ValidatedField,
}

impl LineItem {
    pub fn new(product: CatalogItem) -> Self {
        let price = product.price.map(|p| p.to_string()).unwrap_or_default();
        let stock = product.stock.map(|s| s.to_string()).unwrap_or_default();
        Self {
            product,
            item_id: None,
            quantity: ValidatedField::new(QUANTITY_RULE),
            price: ValidatedField::with_value(AMOUNT_RULE, price),
            discount: ValidatedField::with_value(DISCOUNT_RULE, "0"),
            stock: ValidatedField::with_value(AMOUNT_RULE, stock),
            minimum_stock: ValidatedField::with_value(AMOUNT_RULE, "0"),
            maximum_stock: ValidatedField::with_value(AMOUNT_RULE, "0"),
            start_date: ValidatedField::new(DATE_RULE),
            end_date: ValidatedField::new(DATE_RULE),
        }
    }

    pub fn product_id(&self) -> i64 {
        self.product.id
    }

    pub fn field(&self, field: LineField) -> &ValidatedField {
        match field {
            LineField::Quantity => &self.quantity,
            LineField::Price => &self.price,
            LineField::Discount => &self.discount,
            LineField::Stock => &self.stock,
            LineField::MinimumStock => &self.minimum_stock,
            LineField::MaximumStock => &self.maximum_stock,
            LineField::StartDate => &self.start_date,
            LineField::EndDate => &self.end_date,
        }
    }

    fn field_mut(&mut self, field: LineField) -> &mut ValidatedField {
        match field {
            LineField::Quantity => &mut self.quantity,
            LineField::Price => &mut self.price,
            LineField::Discount => &mut self.discount,
            LineField::Stock => &mut self.stock,
            LineField::MinimumStock => &mut self.minimum_stock,
            LineField::MaximumStock => &mut self.maximum_stock,
            LineField::StartDate => &mut self.start_date,
            LineField::EndDate => &mut self.end_date,
        }
    }

    pub fn dispatch(&mut self, field: LineField, action: FieldAction) {
        self.field_mut(field).dispatch(action);
    }

    /// `price × quantity`, or `None` while either is not a number.
    pub fn sub_total(&self) -> Option<f64> {
        Some(round2(self.price.as_f64()? * self.quantity.as_f64()?))
    }

    /// Subtotal minus the percentage discount, two decimals.
    pub fn total(&self) -> Option<f64> {
        let sub_total = self.sub_total()?;
        let discount = self.discount.as_f64().unwrap_or_default();
        if discount > 0.0 {
            Some(round2(sub_total - sub_total * discount / 100.0))
        } else {
            Some(sub_total)
        }
    }

    pub fn is_ready(&self, required: &[LineField]) -> bool {
        required
            .iter()
            .all(|f| self.field(*f).is_present() && self.field(*f).is_valid())
            && LineField::ALL.iter().all(|f| self.field(*f).is_valid())
    }

    pub fn apply_errors(&mut self, errors: &FieldErrors) {
        for field in LineField::ALL {
            let message = field.wire_names().iter().find_map(|key| errors.first(key));
            if let Some(message) = message {
                self.dispatch(field, FieldAction::Error(message));
            }
        }
    }
}

/// Accumulated selection of a document. A product appears at most once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineItems {
    items: Vec<LineItem>,
}

impl LineItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut list = Self::new();
        for item in items {
            if !list.contains(item.product_id()) {
                list.items.push(item);
            }
        }
        list
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, product_id: i64) -> bool {
        self.items.iter().any(|i| i.product_id() == product_id)
    }

    /// Adds the product unless it is already selected. Returns whether it was
    /// added.
    pub fn add(&mut self, product: CatalogItem) -> bool {
        if self.contains(product.id) {
            return false;
        }
        self.items.push(LineItem::new(product));
        true
    }

    pub fn remove(&mut self, product_id: i64) {
        self.items.retain(|i| i.product_id() != product_id);
    }

    pub fn change(&mut self, product_id: i64, field: LineField, value: String) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id() == product_id) {
            item.dispatch(field, FieldAction::Change(value));
        }
    }

    /// Server error on the row at `index` (submission order).
    pub fn set_error(&mut self, index: usize, field: LineField, message: impl Into<String>) {
        if let Some(item) = self.items.get_mut(index) {
            item.dispatch(field, FieldAction::Error(message.into()));
        }
    }

    pub fn apply_errors(&mut self, rows: &[FieldErrors]) {
        for (item, errors) in self.items.iter_mut().zip(rows) {
            item.apply_errors(errors);
        }
    }

    pub fn grand_total(&self) -> f64 {
        round2(self.items.iter().filter_map(LineItem::total).sum())
    }

    pub fn is_ready(&self, required: &[LineField]) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.is_ready(required))
    }
}

/// A form that owns a set of product lines.
pub trait LineForm {
    fn lines(&self) -> &LineItems;

    fn lines_mut(&mut self) -> &mut LineItems;

    /// Cross-line checks after a cell edit or a removal.
    fn lines_changed(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(id: i64, price: Option<f64>) -> CatalogItem {
        CatalogItem {
            id,
            name: format!("Producto {id}"),
            code: format!("P-{id}"),
            price,
            stock: Some(10.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_selection_is_idempotent() {
        let mut lines = LineItems::new();
        assert!(lines.add(product(1, None)));
        assert!(!lines.add(product(1, Some(5.0))));
        assert_eq!(lines.len(), 1);
        assert!(lines.contains(1));

        lines.remove(1);
        assert!(!lines.contains(1));
        assert!(lines.add(product(1, None)));
    }

    #[test]
    fn test_new_line_defaults() {
        let line = LineItem::new(product(2, Some(12.5)));
        assert_eq!(line.price.value, "12.5");
        assert_eq!(line.quantity.value, "");
        assert_eq!(line.discount.value, "0");
        assert!(line.quantity.is_valid());
        assert_eq!(line.sub_total(), None);
    }

    #[test]
    fn test_totals_with_discount() {
        let mut lines = LineItems::new();
        lines.add(product(1, Some(10.0)));
        lines.add(product(2, Some(3.0)));
        lines.change(1, LineField::Quantity, "3".into());
        lines.change(1, LineField::Discount, "10".into());
        lines.change(2, LineField::Quantity, "2".into());

        assert_eq!(lines.items()[0].sub_total(), Some(30.0));
        assert_eq!(lines.items()[0].total(), Some(27.0));
        assert_eq!(lines.items()[1].total(), Some(6.0));
        assert_eq!(lines.grand_total(), 33.0);
        assert!(lines.is_ready(&[LineField::Quantity, LineField::Price]));
    }

    #[test]
    fn test_invalid_quantity_blocks_readiness() {
        let mut lines = LineItems::new();
        lines.add(product(1, Some(10.0)));
        lines.change(1, LineField::Quantity, "0".into());
        assert!(!lines.items()[0].quantity.is_valid());
        assert!(!lines.is_ready(&[LineField::Quantity]));
        assert!(!LineItems::new().is_ready(&[]));
    }

    #[test]
    fn test_nested_server_errors_land_on_rows() {
        let mut lines = LineItems::new();
        lines.add(product(1, Some(10.0)));
        lines.add(product(2, Some(10.0)));
        let errors = FieldErrors::from_value(json!({
            "sale_items": [{}, {"quantity": ["Stock insuficiente."], "unit_price": ["Fuera de rango."]}]
        }));
        lines.apply_errors(&errors.items("sale_items"));

        assert!(lines.items()[0].quantity.is_valid());
        assert_eq!(lines.items()[1].quantity.feedback(), Some("Stock insuficiente."));
        assert_eq!(lines.items()[1].price.feedback(), Some("Fuera de rango."));

        lines.set_error(0, LineField::Discount, "Descuento no permitido.");
        assert_eq!(lines.items()[0].discount.feedback(), Some("Descuento no permitido."));
    }

    #[test]
    fn test_scope_queries() {
        let scope = PickerScope::Sale { sale: 4, agency: 2 };
        assert_eq!(scope.endpoint(), endpoints::CATALOG);
        assert_eq!(
            scope.query("tornillo"),
            vec![
                ("sale_id", "4".to_string()),
                ("agency_id", "2".to_string()),
                ("search", "tornillo".to_string()),
            ]
        );
        assert!(PickerScope::Products.is_paginated());
        assert!(PickerScope::Products.query(" ").is_empty());
    }

    #[test]
    fn test_selling_channel_scope_filters_rows() {
        let scope = PickerScope::SellingChannel { selling_channel: 1 };
        let mut item = product(1, Some(5.0));
        assert!(!scope.keep(&item));
        item.minimum_sale_price = Some(4.0);
        item.maximum_sale_price = Some(6.0);
        assert!(scope.keep(&item));
        item.stock = Some(0.0);
        assert!(!scope.keep(&item));
        assert!(PickerScope::Agency { agency: 1 }.keep(&item));
    }

    #[test]
    fn test_catalog_row_parses_decimal_strings() {
        let item: CatalogItem = serde_json::from_value(json!({
            "id": 7, "name": "Cemento", "code": "CEM", "price": "45.50",
            "stock": 12, "sale_item_id": 30, "warehouse": "Central"
        }))
        .expect("parse");
        assert_eq!(item.price, Some(45.5));
        assert_eq!(item.sale_item_id, Some(30));
    }
}
