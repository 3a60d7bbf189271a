use serde::{Deserialize, Serialize};

use crate::domain::a010_purchase::aggregate::StockRef;
use crate::domain::a014_payment::aggregate::PaymentPayload;
use crate::domain::common::document::{
    display_date, DocumentStatus, ItemProduct, PaymentRecord, Stage, Stepper,
};
use crate::domain::common::{label_of, ListRow, Person, Related};
use crate::shared::choices::{label_for, TRANSACTION_TYPES};
use crate::shared::endpoints;
use crate::shared::number::{flexible, format_amount};
use crate::system::auth::UserType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub products: Option<ItemProduct>,
    #[serde(default)]
    pub products_stock: Option<StockRef>,
    #[serde(default, deserialize_with = "flexible")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub unit_price: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub sub_total_price: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub discount: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub total_price: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub dispatched_stock: f64,
    #[serde(default)]
    pub status_display: String,
}

impl SaleItem {
    /// The API nests the product either directly or through its stock row.
    pub fn product(&self) -> ItemProduct {
        self.products
            .clone()
            .or_else(|| self.products_stock.as_ref().map(|s| s.products.clone()))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    #[serde(default)]
    pub seller: Person,
    #[serde(default)]
    pub clients: Option<Related>,
    #[serde(default)]
    pub selling_channels: Option<Related>,
    #[serde(default)]
    pub sale_type: String,
    #[serde(default)]
    pub sale_date: String,
    #[serde(default)]
    pub sale_perform_date: Option<String>,
    #[serde(default)]
    pub sale_done_date: Option<String>,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default, deserialize_with = "flexible")]
    pub total: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub balance_due: f64,
    #[serde(default)]
    pub sale_items: Vec<SaleItem>,
    #[serde(default)]
    pub payments: Vec<PaymentRecord>,
}

impl Sale {
    pub fn client_name(&self) -> String {
        label_of(&self.clients)
    }

    pub fn type_label(&self) -> String {
        if self.status == DocumentStatus::Proforma {
            DocumentStatus::Proforma.label().to_string()
        } else {
            label_for(&TRANSACTION_TYPES, &self.sale_type)
        }
    }

    /// Only proformas may be edited or performed.
    pub fn is_editable(&self) -> bool {
        self.status == DocumentStatus::Proforma
    }

    pub fn can_register_payment(&self, user: Option<UserType>) -> bool {
        self.status != DocumentStatus::Proforma
            && self.balance_due > 0.0
            && matches!(user, Some(UserType::Administrator | UserType::Cashier))
    }

    pub fn can_register_output(&self, user: Option<UserType>) -> bool {
        self.status == DocumentStatus::Realizado
            && matches!(user, Some(UserType::Administrator | UserType::Warehouse))
    }

    pub fn stepper(&self) -> Stepper {
        let reached = |date: &Option<String>, on: bool| match (date, on) {
            (Some(d), true) => display_date(d),
            _ => String::new(),
        };
        let performed = self.status != DocumentStatus::Proforma;
        let finished = self.status.is_finished();
        Stepper {
            stages: vec![
                Stage {
                    label: "Proforma",
                    date: display_date(&self.sale_date),
                },
                Stage {
                    label: "Realizada",
                    date: reached(&self.sale_perform_date, performed),
                },
                Stage {
                    label: "Terminado",
                    date: reached(&self.sale_done_date, finished),
                },
            ],
            active: match self.status {
                DocumentStatus::Proforma => 1,
                DocumentStatus::Realizado => 2,
                DocumentStatus::Terminado => 3,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItemPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub product: i64,
    pub quantity: String,
    pub unit_price: String,
    pub sub_total_price: f64,
    pub discount: String,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalePayload {
    pub agency: i64,
    pub client: i64,
    pub selling_channel: i64,
    pub sale_date: String,
    pub sale_perform_date: Option<String>,
    pub sale_type: String,
    pub status: DocumentStatus,
    pub total: f64,
    pub balance_due: f64,
    pub sale_items: Vec<SaleItemPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<PaymentPayload>,
}

impl ListRow for Sale {
    const ENDPOINT: &'static str = endpoints::SALES;
    const COLUMNS: &'static [&'static str] = &[
        "Vendedor",
        "Cliente",
        "Tipo",
        "Canal",
        "Fecha",
        "Total",
        "Saldo",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.seller.full_name(),
            self.client_name(),
            self.type_label(),
            label_of(&self.selling_channels),
            display_date(&self.sale_date),
            format_amount(self.total),
            format_amount(self.balance_due),
        ]
    }
}
