use serde::{Deserialize, Serialize};

use crate::domain::common::{label_of, ListRow, Related};
use crate::shared::endpoints;
use crate::shared::number::{flexible, format_quantity};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

/// Stock of one product held in one warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStock {
    pub id: i64,
    #[serde(default)]
    pub products: StockProduct,
    #[serde(default)]
    pub warehouses: Option<Related>,
    #[serde(default, deserialize_with = "flexible")]
    pub stock: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub available_stock: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub damaged_stock: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub minimum_stock: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub maximum_stock: f64,
}

/// Body of `POST product-stocks/{id}/increment-damaged-stock/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamagedStockPayload {
    pub quantity: String,
}

impl ListRow for ProductStock {
    const ENDPOINT: &'static str = endpoints::PRODUCT_STOCKS;
    const COLUMNS: &'static [&'static str] = &[
        "Código",
        "Producto",
        "Almacén",
        "Stock",
        "Disponible",
        "Dañado",
        "Mínimo",
        "Máximo",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.products.code.clone(),
            self.products.name.clone(),
            label_of(&self.warehouses),
            format_quantity(self.stock),
            format_quantity(self.available_stock),
            format_quantity(self.damaged_stock),
            format_quantity(self.minimum_stock),
            format_quantity(self.maximum_stock),
        ]
    }
}
