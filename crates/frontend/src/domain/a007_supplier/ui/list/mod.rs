use contracts::domain::a007_supplier::aggregate::Supplier;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::list_view::{RowAction, ServerList};

fn actions(supplier: &Supplier, session: &Session) -> Vec<RowAction> {
    if session.has_permission("core.change_supplier") {
        vec![RowAction::route("Editar", "edit", paths::edit(SECTION, supplier.id))]
    } else {
        Vec::new()
    }
}

#[component]
pub fn SupplierList() -> impl IntoView {
    view! {
        <ServerList<Supplier>
            title="Proveedores"
            page_id="a007_supplier--list"
            actions=actions
            add_path=paths::add(SECTION)
            add_permission="core.add_supplier"
        />
    }
}
