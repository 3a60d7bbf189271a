use contracts::domain::a004_batch::aggregate::Batch;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::list_view::{RowAction, ServerList};

fn actions(batch: &Batch, session: &Session) -> Vec<RowAction> {
    if session.has_permission("core.change_batch") {
        vec![RowAction::route("Editar", "edit", paths::edit(SECTION, batch.id))]
    } else {
        Vec::new()
    }
}

#[component]
pub fn BatchList() -> impl IntoView {
    view! {
        <ServerList<Batch>
            title="Lotes"
            page_id="a004_batch--list"
            actions=actions
            add_path=paths::add(SECTION)
            add_permission="core.add_batch"
        />
    }
}
