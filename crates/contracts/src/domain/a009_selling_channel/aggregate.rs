use serde::{Deserialize, Serialize};

use crate::domain::common::ListRow;
use crate::shared::endpoints;
use crate::shared::number::flexible_opt;

/// Price of a product while sold through a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelProduct {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, deserialize_with = "flexible_opt")]
    pub price: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellingChannel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub products: Vec<ChannelProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelPricePayload {
    pub product: i64,
    pub price: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellingChannelPayload {
    pub name: String,
    pub product_channel_price: Vec<ChannelPricePayload>,
}

impl ListRow for SellingChannel {
    const ENDPOINT: &'static str = endpoints::SELLING_CHANNELS;
    const COLUMNS: &'static [&'static str] = &["Nombre", "Productos"];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.products.len().to_string()]
    }
}
