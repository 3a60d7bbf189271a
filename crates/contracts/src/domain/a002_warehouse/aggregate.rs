use serde::{Deserialize, Serialize};

use crate::domain::common::{label_of, ListRow, Related};
use crate::shared::endpoints;
use crate::shared::number::flexible;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseStock {
    /// Product-stock row id, sent back on edit.
    #[serde(default)]
    pub id: Option<i64>,
    pub product: Related,
    #[serde(default, deserialize_with = "flexible")]
    pub stock: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub minimum_stock: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub maximum_stock: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub agency: Option<Related>,
    #[serde(default)]
    pub product_stock: Vec<WarehouseStock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseStockPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub product: i64,
    pub stock: String,
    pub minimum_stock: String,
    pub maximum_stock: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehousePayload {
    pub name: String,
    pub location: String,
    pub agency_id: i64,
    pub product_stock: Vec<WarehouseStockPayload>,
}

impl ListRow for Warehouse {
    const ENDPOINT: &'static str = endpoints::WAREHOUSES;
    const COLUMNS: &'static [&'static str] = &["Nombre", "Dirección", "Agencia", "Productos"];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.location.clone(),
            label_of(&self.agency),
            self.product_stock.len().to_string(),
        ]
    }
}
