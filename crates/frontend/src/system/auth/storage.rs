use contracts::system::auth::{keys, Session};
use web_sys::window;

fn session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    session_storage()?.get_item(key).ok()?
}

fn set_item(key: &str, value: &str) {
    if let Some(storage) = session_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("sessionStorage rejected {key}");
        }
    }
}

fn remove_item(key: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Persist the logged-in user for the lifetime of the tab.
pub fn save_session(session: &Session) {
    for (key, value) in session.to_storage() {
        set_item(key, &value);
    }
}

pub fn load_session() -> Option<Session> {
    Session::from_storage(get_item)
}

pub fn save_agency(agency_id: i64) {
    set_item(keys::AGENCY, &agency_id.to_string());
}

pub fn load_agency() -> Option<i64> {
    get_item(keys::AGENCY)?.parse().ok()
}

pub fn clear_agency() {
    remove_item(keys::AGENCY);
}

/// Forget everything written by [`save_session`] and [`save_agency`].
pub fn clear() {
    for key in keys::SESSION {
        remove_item(key);
    }
    clear_agency();
}
