use serde::{Deserialize, Serialize};

use crate::domain::common::ListRow;
use crate::shared::endpoints;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SuppliedProduct {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub nit: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub products: Vec<SuppliedProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierPayload {
    pub name: String,
    pub phone: String,
    pub nit: String,
    pub email: String,
    pub address: String,
    /// Ids of the products this supplier provides.
    pub product: Vec<i64>,
}

impl ListRow for Supplier {
    const ENDPOINT: &'static str = endpoints::SUPPLIERS;
    const COLUMNS: &'static [&'static str] = &["Nombre", "Teléfono", "NIT", "Correo", "Dirección"];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.phone.clone(),
            self.nit.clone(),
            self.email.clone(),
            self.address.clone(),
        ]
    }
}
