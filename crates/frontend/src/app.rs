use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::system::agency::AgencyContext;
use crate::system::auth::{idle, AuthContext};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::debug!("api at {}", config.api_base);

    let agency = AgencyContext::new();
    provide_context(agency);
    let auth = AuthContext::new(agency);
    provide_context(auth);
    idle::install(auth, config.idle_timeout_ms);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
