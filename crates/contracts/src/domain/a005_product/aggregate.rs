use serde::{Deserialize, Serialize};

use crate::domain::common::{label_of, ListRow, Related};
use crate::shared::endpoints;
use crate::shared::number::{flexible, format_amount};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    /// Absolute URL of the uploaded picture.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub batch: Option<Related>,
    #[serde(default, deserialize_with = "flexible")]
    pub stock: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub minimum_stock: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub maximum_stock: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub minimum_sale_price: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub maximum_sale_price: f64,
    #[serde(default)]
    pub unit_of_measurement: String,
}

/// Text parts of the multipart body. The image file is appended by the
/// caller when one was picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub batch_id: String,
    pub name: String,
    pub stock: String,
    pub code: String,
    pub description: String,
    pub minimum_stock: String,
    pub maximum_stock: String,
    pub minimum_sale_price: String,
    pub maximum_sale_price: String,
    pub unit_of_measurement: String,
}

impl ProductPayload {
    /// Multipart parts in the order the server documents them.
    pub fn parts(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("batch_id", self.batch_id.as_str()),
            ("name", self.name.as_str()),
            ("stock", self.stock.as_str()),
            ("code", self.code.as_str()),
            ("description", self.description.as_str()),
            ("minimum_stock", self.minimum_stock.as_str()),
            ("maximum_stock", self.maximum_stock.as_str()),
            ("minimum_sale_price", self.minimum_sale_price.as_str()),
            ("maximum_sale_price", self.maximum_sale_price.as_str()),
            ("unit_of_measurement", self.unit_of_measurement.as_str()),
        ]
    }
}

impl ListRow for Product {
    const ENDPOINT: &'static str = endpoints::PRODUCTS;
    const COLUMNS: &'static [&'static str] = &[
        "Código",
        "Nombre",
        "Lote",
        "Unidad",
        "Precio mínimo",
        "Precio máximo",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            label_of(&self.batch),
            self.unit_of_measurement.clone(),
            format_amount(self.minimum_sale_price),
            format_amount(self.maximum_sale_price),
        ]
    }
}
