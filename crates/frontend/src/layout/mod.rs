pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::routes::paths;
use crate::shared::navigator::Navigator;
use crate::system::agency::use_agency;
use crate::system::auth::use_auth;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Shell of every `/principal/*` page.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Outlet              |
/// +------------------------------------------+
/// ```
///
/// Without a session the user goes back to the login page; without an
/// agency, to the agency picker.
#[component]
pub fn MainLayout() -> impl IntoView {
    let auth = use_auth();
    let agency = use_agency();
    let navigator = Navigator::new();
    let sidebar_open = RwSignal::new(true);

    let allowed = move || auth.is_logged_in() && agency.current().is_some();
    Effect::new(move |_| {
        if !auth.is_logged_in() {
            navigator.redirect(paths::LOGIN);
        } else if agency.current().is_none() {
            navigator.redirect(paths::SELECT_AGENCY);
        }
    });

    view! {
        <Show when=allowed>
            <div class="app-layout">
                <TopHeader sidebar_open=sidebar_open />
                <div class="app-body">
                    <aside class="app-sidebar" class:app-sidebar--collapsed=move || !sidebar_open.get()>
                        <Sidebar />
                    </aside>
                    <main class="app-main">
                        <Outlet />
                    </main>
                </div>
            </div>
        </Show>
    }
}
