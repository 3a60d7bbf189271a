use contracts::domain::a012_entry::aggregate::Entry;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::list_view::{RowAction, ServerList};

fn actions(entry: &Entry, _session: &Session) -> Vec<RowAction> {
    vec![RowAction::route("Ver entrada", "info", paths::action(SECTION, paths::INFO, entry.id))]
}

/// Entries are registered from their purchase, so there is no add button.
#[component]
pub fn EntryList() -> impl IntoView {
    view! { <ServerList<Entry> title="Entradas" page_id="a012_entry--list" actions=actions /> }
}
