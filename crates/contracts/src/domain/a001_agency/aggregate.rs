use serde::{Deserialize, Serialize};

use crate::domain::common::ListRow;
use crate::shared::endpoints;

/// Branch of the business. The selected agency scopes stock queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    /// City code (`LP`, `CBBA`, ...).
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyPayload {
    pub name: String,
    pub location: String,
    pub city: String,
}

impl ListRow for Agency {
    const ENDPOINT: &'static str = endpoints::AGENCIES;
    const COLUMNS: &'static [&'static str] = &["Nombre", "Dirección", "Ciudad"];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.location.clone(), self.city.clone()]
    }
}
