use contracts::domain::a002_warehouse::aggregate::Warehouse;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::list_view::{RowAction, ServerList};

fn actions(warehouse: &Warehouse, session: &Session) -> Vec<RowAction> {
    if session.has_permission("core.change_warehouse") {
        vec![RowAction::route("Editar", "edit", paths::edit(SECTION, warehouse.id))]
    } else {
        Vec::new()
    }
}

#[component]
pub fn WarehouseList() -> impl IntoView {
    view! {
        <ServerList<Warehouse>
            title="Almacenes"
            page_id="a002_warehouse--list"
            actions=actions
            add_path=paths::add(SECTION)
            add_permission="core.add_warehouse"
        />
    }
}
