use serde::{Deserialize, Serialize};

use crate::domain::a014_payment::aggregate::PaymentPayload;
use crate::domain::common::document::{
    display_date, DocumentStatus, ItemProduct, PaymentRecord, Stage, Stepper,
};
use crate::domain::common::{label_of, ListRow, Person, Related};
use crate::shared::choices::{label_for, TRANSACTION_TYPES};
use crate::shared::endpoints;
use crate::shared::number::{flexible, flexible_text, format_amount};
use crate::system::auth::UserType;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub products: ItemProduct,
    #[serde(default)]
    pub warehouses: Option<Related>,
}

impl StockRef {
    pub fn warehouse_name(&self) -> String {
        label_of(&self.warehouses)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub products_stock: StockRef,
    #[serde(default, deserialize_with = "flexible")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub unit_price: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub total_price: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub entered_stock: f64,
    #[serde(default)]
    pub status_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    #[serde(default)]
    pub buyer: Person,
    #[serde(default)]
    pub suppliers: Option<Related>,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub purchase_end_date: Option<String>,
    #[serde(default, deserialize_with = "flexible_text")]
    pub invoice_number: String,
    #[serde(default)]
    pub purchase_type: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default, deserialize_with = "flexible")]
    pub total: f64,
    #[serde(default, deserialize_with = "flexible")]
    pub balance_due: f64,
    #[serde(default)]
    pub purchase_items: Vec<PurchaseItem>,
    #[serde(default)]
    pub payments: Vec<PaymentRecord>,
}

impl Purchase {
    pub fn supplier_name(&self) -> String {
        label_of(&self.suppliers)
    }

    /// Warehouse staff receive goods until the purchase is finished.
    pub fn can_register_entry(&self, user: Option<UserType>) -> bool {
        !self.status.is_finished()
            && matches!(user, Some(UserType::Administrator | UserType::Warehouse))
    }

    /// Cashiers collect while a balance remains.
    pub fn can_register_payment(&self, user: Option<UserType>) -> bool {
        self.balance_due > 0.0
            && matches!(user, Some(UserType::Administrator | UserType::Cashier))
    }

    pub fn stepper(&self) -> Stepper {
        let finished = self.status.is_finished();
        Stepper {
            stages: vec![
                Stage {
                    label: "Realizado",
                    date: display_date(&self.purchase_date),
                },
                Stage {
                    label: "Terminado",
                    date: match (&self.purchase_end_date, finished) {
                        (Some(date), true) => display_date(date),
                        _ => String::new(),
                    },
                },
            ],
            active: if finished { 2 } else { 1 },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItemPayload {
    pub product_stock: i64,
    pub quantity: String,
    pub unit_price: String,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasePayload {
    pub agency: i64,
    pub supplier: i64,
    pub purchase_date: String,
    pub invoice_number: String,
    pub purchase_type: String,
    pub status: DocumentStatus,
    pub total: f64,
    pub balance_due: f64,
    pub purchase_items: Vec<PurchaseItemPayload>,
    pub payments: PaymentPayload,
}

impl ListRow for Purchase {
    const ENDPOINT: &'static str = endpoints::PURCHASES;
    const COLUMNS: &'static [&'static str] = &[
        "Comprador",
        "Proveedor",
        "Tipo",
        "Fecha",
        "Factura",
        "Total",
        "Saldo",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.buyer.full_name(),
            self.supplier_name(),
            label_for(&TRANSACTION_TYPES, &self.purchase_type),
            display_date(&self.purchase_date),
            self.invoice_number.clone(),
            format_amount(self.total),
            format_amount(self.balance_due),
        ]
    }
}
