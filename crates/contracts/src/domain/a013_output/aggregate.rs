use serde::{Deserialize, Serialize};

use crate::domain::a010_purchase::aggregate::StockRef;
use crate::domain::common::document::display_date;
use crate::domain::common::{label_of, or_dash, ListRow, Related};
use crate::shared::endpoints;
use crate::shared::number::flexible;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputItem {
    #[serde(default)]
    pub products_stock: StockRef,
    #[serde(default, deserialize_with = "flexible")]
    pub quantity: f64,
}

/// Goods of a sale dispatched from a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub id: i64,
    #[serde(default)]
    pub clients: Option<Related>,
    #[serde(default)]
    pub output_date: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub output_items: Vec<OutputItem>,
}

impl Output {
    pub fn pdf_path(&self) -> String {
        endpoints::output_pdf(self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputItemPayload {
    pub sale_item: Option<i64>,
    pub product_stock: i64,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputPayload {
    pub client: i64,
    pub output_date: String,
    pub output_items: Vec<OutputItemPayload>,
}

impl ListRow for Output {
    const ENDPOINT: &'static str = endpoints::OUTPUTS;
    const COLUMNS: &'static [&'static str] = &["Cliente", "Fecha", "Nota"];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            label_of(&self.clients),
            display_date(&self.output_date),
            or_dash(&self.note),
        ]
    }
}
