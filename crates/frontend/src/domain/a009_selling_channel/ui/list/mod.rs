use contracts::domain::a009_selling_channel::aggregate::SellingChannel;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::list_view::{RowAction, ServerList};

fn actions(channel: &SellingChannel, session: &Session) -> Vec<RowAction> {
    if session.has_permission("core.change_sellingchannel") {
        vec![RowAction::route("Editar", "edit", paths::edit(SECTION, channel.id))]
    } else {
        Vec::new()
    }
}

#[component]
pub fn SellingChannelList() -> impl IntoView {
    view! {
        <ServerList<SellingChannel>
            title="Canales de Venta"
            page_id="a009_selling_channel--list"
            actions=actions
            add_path=paths::add(SECTION)
            add_permission="core.add_sellingchannel"
        />
    }
}
