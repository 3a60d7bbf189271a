use contracts::domain::a001_agency::aggregate::Agency;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::list_view::{RowAction, ServerList};

fn actions(agency: &Agency, session: &Session) -> Vec<RowAction> {
    let mut actions = Vec::new();
    if session.has_permission("core.change_agency") {
        actions.push(RowAction::route("Editar", "edit", paths::edit(SECTION, agency.id)));
    }
    actions
}

#[component]
pub fn AgencyList() -> impl IntoView {
    view! {
        <ServerList<Agency>
            title="Agencias"
            page_id="a001_agency--list"
            actions=actions
            add_path=paths::add(SECTION)
            add_permission="core.add_agency"
        />
    }
}
