use serde::{Deserialize, Serialize};

use crate::domain::common::ListRow;
use crate::shared::choices::{label_for, CLIENT_TYPES};
use crate::shared::endpoints;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
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
    pub client_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientPayload {
    pub name: String,
    pub phone: String,
    pub nit: String,
    pub email: String,
    pub address: String,
    pub client_type: String,
}

impl ListRow for Client {
    const ENDPOINT: &'static str = endpoints::CLIENTS;
    const COLUMNS: &'static [&'static str] =
        &["Nombre", "Teléfono", "CI/NIT", "Correo", "Dirección", "Tipo"];

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
            label_for(&CLIENT_TYPES, &self.client_type),
        ]
    }
}
