use contracts::shared::endpoints;
use leptos::prelude::*;
use thaw::*;

use super::context::use_agency;
use crate::routes::paths;
use crate::shared::choices::named_choices;
use crate::shared::components::ChoiceSelect;
use crate::shared::navigator::Navigator;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::use_auth;

/// Agency picker shown after login and whenever none is stored.
#[component]
pub fn SelectAgencyPage() -> impl IntoView {
    let auth = use_auth();
    let agency = use_agency();
    let navigator = Navigator::new();
    let agencies = named_choices(endpoints::ALL_AGENCIES);
    let selected = RwSignal::new(String::new());

    Effect::new(move |_| {
        if !auth.is_logged_in() {
            navigator.redirect(paths::LOGIN);
        }
    });

    let confirm = move |_| {
        let Ok(id) = selected.with_untracked(|s| s.parse::<i64>()) else {
            return;
        };
        log::info!("working in agency {id}");
        agency.choose(id);
        navigator.go(paths::DASHBOARD);
    };

    view! {
        <PageFrame page_id="select_agency--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h1>"Seleccione una agencia"</h1>
                    <Show
                        when=move || agencies.with(|a| !a.is_empty())
                        fallback=|| view! { <p>"No hay agencias disponibles."</p> }
                    >
                        <ChoiceSelect
                            label="Agencia"
                            value=selected
                            options=agencies
                            on_change=Callback::new(move |id| selected.set(id))
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=confirm
                            disabled=Signal::derive(move || selected.with(String::is_empty))
                        >
                            "Confirmar"
                        </Button>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
