use contracts::domain::a008_client::aggregate::Client;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::list_view::{RowAction, ServerList};

fn actions(client: &Client, session: &Session) -> Vec<RowAction> {
    if session.has_permission("core.change_client") {
        vec![RowAction::route("Editar", "edit", paths::edit(SECTION, client.id))]
    } else {
        Vec::new()
    }
}

#[component]
pub fn ClientList() -> impl IntoView {
    view! {
        <ServerList<Client>
            title="Clientes"
            page_id="a008_client--list"
            actions=actions
            add_path=paths::add(SECTION)
            add_permission="core.add_client"
        />
    }
}
