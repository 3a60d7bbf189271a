use contracts::domain::a013_output::aggregate::Output;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::list_view::{RowAction, ServerList};

fn actions(output: &Output, _session: &Session) -> Vec<RowAction> {
    vec![
        RowAction::route("Ver salida", "info", paths::action(SECTION, paths::INFO, output.id)),
        RowAction::new_tab("Nota de salida PDF", "download", output.pdf_path()),
    ]
}

#[component]
pub fn OutputList() -> impl IntoView {
    view! { <ServerList<Output> title="Salidas" page_id="a013_output--list" actions=actions /> }
}
