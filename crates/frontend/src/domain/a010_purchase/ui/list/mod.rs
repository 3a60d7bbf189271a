use contracts::domain::a010_purchase::aggregate::Purchase;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::list_view::{RowAction, ServerList};

pub(crate) fn actions(purchase: &Purchase, session: &Session) -> Vec<RowAction> {
    let user = session.user_type();
    let mut actions = vec![RowAction::route(
        "Ver compra",
        "info",
        paths::action(SECTION, paths::INFO, purchase.id),
    )];
    if purchase.can_register_entry(user) {
        actions.push(RowAction::route(
            "Realizar entrada almacén",
            "log-in",
            paths::action(SECTION, paths::ADD_ENTRY, purchase.id),
        ));
    }
    if purchase.can_register_payment(user) {
        actions.push(RowAction::route(
            "Agregar pago",
            "wallet",
            paths::action(SECTION, paths::ADD_PAYMENT, purchase.id),
        ));
    }
    actions
}

#[component]
pub fn PurchaseList() -> impl IntoView {
    view! {
        <ServerList<Purchase>
            title="Compras"
            page_id="a010_purchase--list"
            actions=actions
            add_path=paths::add(SECTION)
            add_permission="core.add_purchase"
        />
    }
}
