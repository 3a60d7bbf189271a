use contracts::domain::a011_sale::aggregate::Sale;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::list_view::{RowAction, ServerList};

fn actions(sale: &Sale, session: &Session) -> Vec<RowAction> {
    let mut actions = Vec::new();
    if sale.is_editable() && session.has_permission("core.change_sale") {
        actions.push(RowAction::route(
            "Realizar venta",
            "wallet",
            paths::action(SECTION, paths::PERFORM, sale.id),
        ));
        actions.push(RowAction::route("Editar proforma", "edit", paths::edit(SECTION, sale.id)));
    }
    actions.push(RowAction::route(
        "Ver venta",
        "info",
        paths::action(SECTION, paths::INFO, sale.id),
    ));
    actions
}

#[component]
pub fn SaleList() -> impl IntoView {
    view! {
        <ServerList<Sale>
            title="Ventas"
            page_id="a011_sale--list"
            actions=actions
            add_path=paths::add(SECTION)
            add_permission="core.add_sale"
        />
    }
}
