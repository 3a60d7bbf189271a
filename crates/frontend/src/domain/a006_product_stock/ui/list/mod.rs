use contracts::domain::a006_product_stock::aggregate::ProductStock;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::list_view::{RowAction, ServerList};

fn actions(stock: &ProductStock, session: &Session) -> Vec<RowAction> {
    if session.has_permission("core.change_productstock") {
        vec![RowAction::route(
            "Registrar dañado",
            "alert",
            paths::action(SECTION, paths::DAMAGED, stock.id),
        )]
    } else {
        Vec::new()
    }
}

/// Stock has no add page: rows are created with warehouses and products.
#[component]
pub fn ProductStockList() -> impl IntoView {
    view! {
        <ServerList<ProductStock> title="Stock" page_id="a006_product_stock--list" actions=actions />
    }
}
