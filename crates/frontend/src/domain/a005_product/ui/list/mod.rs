use contracts::domain::a005_product::aggregate::Product;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::list_view::{RowAction, ServerList};

fn actions(product: &Product, session: &Session) -> Vec<RowAction> {
    if session.has_permission("core.change_product") {
        vec![RowAction::route("Editar", "edit", paths::edit(SECTION, product.id))]
    } else {
        Vec::new()
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    view! {
        <ServerList<Product>
            title="Productos"
            page_id="a005_product--list"
            actions=actions
            add_path=paths::add(SECTION)
            add_permission="core.add_product"
        />
    }
}
