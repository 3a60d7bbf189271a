use leptos::prelude::*;

use crate::routes::paths;
use crate::shared::icons::icon;
use crate::shared::navigator::Navigator;
use crate::system::auth::use_auth;

#[component]
pub fn TopHeader(sidebar_open: RwSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let navigator = Navigator::new();

    let user_name = move || {
        auth.session
            .with(|s| s.as_ref().map(|s| s.display_name()).unwrap_or_default())
    };
    let logout = move |_| {
        auth.logout();
        navigator.go(paths::LOGIN);
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| sidebar_open.update(|open| *open = !*open)
                    title=move || if sidebar_open.get() { "Ocultar menú" } else { "Mostrar menú" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Administración"</span>
            </div>
            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_name}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Cerrar sesión">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
