use contracts::system::auth::Session;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::http::ApiError;
use crate::system::agency::AgencyContext;

/// Logged-in user, restored from `sessionStorage` on startup.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
    agency: AgencyContext,
}

impl AuthContext {
    pub fn new(agency: AgencyContext) -> Self {
        Self {
            session: RwSignal::new(storage::load_session()),
            agency,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn login(&self, session: Session) {
        log::info!("logged in as {}", session.email);
        storage::save_session(&session);
        self.session.set(Some(session));
    }

    /// Clears the session and the selected agency, then tells the server.
    pub fn logout(&self) {
        if self.session.with_untracked(Option::is_none) {
            return;
        }
        storage::clear();
        self.agency.reset();
        self.session.set(None);
        spawn_local(api::logout());
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.session
            .with(|s| s.as_ref().is_some_and(|s| s.has_permission(permission)))
    }

    /// Common reaction to a failed call. Returns the text to show, if any.
    pub fn handle_error(&self, error: &ApiError) -> Option<String> {
        match error {
            ApiError::Aborted => None,
            ApiError::SessionExpired => {
                self.logout();
                Some(error.to_string())
            }
            other => Some(other.user_message()),
        }
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in component tree")
}
