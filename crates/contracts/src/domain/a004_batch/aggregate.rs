use serde::{Deserialize, Serialize};

use crate::domain::common::{label_of, ListRow, Related};
use crate::shared::endpoints;

/// Product line ("lote") grouped under a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<Related>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchPayload {
    pub name: String,
    pub category_id: i64,
}

impl ListRow for Batch {
    const ENDPOINT: &'static str = endpoints::BATCHES;
    const COLUMNS: &'static [&'static str] = &["Nombre", "Categoría"];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), label_of(&self.category)]
    }
}
