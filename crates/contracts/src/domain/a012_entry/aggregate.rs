use serde::{Deserialize, Serialize};

use crate::domain::a010_purchase::aggregate::StockRef;
use crate::domain::common::document::display_date;
use crate::domain::common::{label_of, ListRow, Related};
use crate::shared::endpoints;
use crate::shared::number::{flexible, flexible_text};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryItem {
    #[serde(default)]
    pub products_stock: StockRef,
    #[serde(default, deserialize_with = "flexible")]
    pub quantity: f64,
}

/// Goods of a purchase received into a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    #[serde(default)]
    pub suppliers: Option<Related>,
    #[serde(default)]
    pub entry_date: String,
    #[serde(default, deserialize_with = "flexible_text")]
    pub invoice_number: String,
    #[serde(default)]
    pub entry_items: Vec<EntryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryItemPayload {
    pub purchase_item: Option<i64>,
    pub product_stock: i64,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPayload {
    pub purchase: i64,
    pub agency: i64,
    pub supplier: i64,
    pub entry_date: String,
    pub invoice_number: String,
    pub entry_items: Vec<EntryItemPayload>,
}

impl ListRow for Entry {
    const ENDPOINT: &'static str = endpoints::ENTRIES;
    const COLUMNS: &'static [&'static str] = &["Proveedor", "Fecha", "Factura"];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            label_of(&self.suppliers),
            display_date(&self.entry_date),
            self.invoice_number.clone(),
        ]
    }
}
