use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

type NavigateFn = Box<dyn Fn(&str, NavigateOptions)>;

/// Router navigation that can be captured by `Send` closures (thaw
/// callbacks, `Show` children). Must be created under the `<Router>`.
#[derive(Clone, Copy)]
pub struct Navigator(StoredValue<NavigateFn, LocalStorage>);

impl Navigator {
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self(StoredValue::new_local(Box::new(navigate) as NavigateFn))
    }

    pub fn go(&self, path: &str) {
        if self.0.try_with_value(|navigate| navigate(path, NavigateOptions::default())).is_none() {
            log::debug!("navigation to {path} after unmount ignored");
        }
    }

    /// Replaces the current history entry.
    pub fn redirect(&self, path: &str) {
        let options = NavigateOptions {
            replace: true,
            ..Default::default()
        };
        let _ = self.0.try_with_value(|navigate| navigate(path, options));
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

/// Opens an API document (PDF, spreadsheet) in a new tab.
pub fn open_in_new_tab(url: &str) {
    let opened = web_sys::window().map(|w| w.open_with_url_and_target(url, "_blank"));
    if !matches!(opened, Some(Ok(_))) {
        log::warn!("cannot open {url}");
    }
}

/// Numeric `:id` of the current route, `None` on "add" pages.
pub fn route_id() -> Option<i64> {
    use_params_map()
        .with_untracked(|params| params.get("id"))
        .and_then(|id| id.parse().ok())
}
