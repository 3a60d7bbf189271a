use contracts::domain::a014_payment::aggregate::{Payment, TransactionType};
use contracts::system::auth::Session;
use leptos::prelude::*;

use crate::domain::{a010_purchase, a011_sale};
use crate::routes::paths;
use crate::shared::list_view::{RowAction, ServerList};

/// Link to the purchase or sale the payment settles.
fn actions(payment: &Payment, session: &Session) -> Vec<RowAction> {
    let (Some(kind), Some(id)) = (payment.transaction_type, payment.transaction_id) else {
        return Vec::new();
    };
    let (section, permission) = match kind {
        TransactionType::Compra => (a010_purchase::SECTION, "core.view_purchase"),
        TransactionType::Venta => (a011_sale::SECTION, "core.view_sale"),
    };
    if !session.has_permission(permission) {
        return Vec::new();
    }
    vec![RowAction::route("Ver documento", "info", paths::action(section, paths::INFO, id))]
}

#[component]
pub fn PaymentList() -> impl IntoView {
    view! { <ServerList<Payment> title="Pagos" page_id="a014_payment--list" actions=actions /> }
}
