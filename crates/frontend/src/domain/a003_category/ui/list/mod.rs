use contracts::domain::a003_category::aggregate::Category;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::list_view::{RowAction, ServerList};

fn actions(category: &Category, session: &Session) -> Vec<RowAction> {
    if session.has_permission("core.change_category") {
        vec![RowAction::route("Editar", "edit", paths::edit(SECTION, category.id))]
    } else {
        Vec::new()
    }
}

#[component]
pub fn CategoryList() -> impl IntoView {
    view! {
        <ServerList<Category>
            title="Categorias"
            page_id="a003_category--list"
            actions=actions
            add_path=paths::add(SECTION)
            add_permission="core.add_category"
        />
    }
}
