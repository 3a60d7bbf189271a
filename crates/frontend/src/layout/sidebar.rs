use contracts::system::navigation::visible_sections;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::paths;
use crate::shared::icons::icon;
use crate::system::auth::use_auth;

/// Section links the user holds the view permission for.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let sections = move || {
        auth.session
            .with(|s| s.as_ref().map(visible_sections).unwrap_or_default())
    };

    view! {
        <nav class="app-sidebar__content">
            <A href=paths::DASHBOARD attr:class="app-sidebar__item">
                <div class="app-sidebar__item-content">
                    {icon("home")}
                    <span>"Inicio"</span>
                </div>
            </A>
            <For
                each=sections
                key=|section| section.path
                children=|section| view! {
                    <A href=paths::list(section.path) attr:class="app-sidebar__item">
                        <div class="app-sidebar__item-content">
                            {icon(section.icon)}
                            <span>{section.label}</span>
                        </div>
                    </A>
                }
            />
        </nav>
    }
}
