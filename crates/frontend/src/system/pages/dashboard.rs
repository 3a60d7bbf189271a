use contracts::domain::a001_agency::aggregate::Agency;
use contracts::shared::endpoints;
use contracts::system::navigation::visible_sections;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::paths;
use crate::shared::components::PageHeader;
use crate::shared::detail_view::DetailViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::agency::use_agency;
use crate::system::auth::use_auth;

/// Landing page: who is working, in which agency, and shortcuts to the
/// sections they can open.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let vm = DetailViewModel::<Agency>::new();
    if let Some(id) = use_agency().current() {
        vm.load(auth, endpoints::item(endpoints::AGENCIES, id));
    }

    let (greeting, role) = auth.session.with_untracked(|s| {
        let name = s.as_ref().map(|s| s.display_name()).unwrap_or_default();
        let role = s
            .as_ref()
            .and_then(|s| s.user_type())
            .map(|t| t.label().to_string())
            .unwrap_or_default();
        (format!("Bienvenido, {name}"), role)
    });
    let sections = move || {
        auth.session
            .with(|s| s.as_ref().map(visible_sections).unwrap_or_default())
    };
    let agency_name = vm.render(|agency: Agency| view! {
        <span class="dashboard__agency">{agency.name}</span>
    });

    view! {
        <PageFrame page_id="dashboard--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title=greeting subtitle=role>
                {agency_name}
            </PageHeader>
            <div class="dashboard__grid">
                <For
                    each=sections
                    key=|section| section.path
                    children=|section| view! {
                        <A href=paths::list(section.path) attr:class="dashboard__card">
                            {icon(section.icon)}
                            <span>{section.label}</span>
                        </A>
                    }
                />
            </div>
        </PageFrame>
    }
}
