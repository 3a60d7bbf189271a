use serde::{Deserialize, Serialize};

use crate::domain::common::ListRow;
use crate::shared::endpoints;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
}

impl ListRow for Category {
    const ENDPOINT: &'static str = endpoints::CATEGORIES;
    const COLUMNS: &'static [&'static str] = &["Nombre"];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}
