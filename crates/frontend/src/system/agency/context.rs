use leptos::prelude::*;

use crate::system::auth::storage;

/// Agency the user works in; scopes stock, purchases and sales.
#[derive(Clone, Copy)]
pub struct AgencyContext {
    pub selected: RwSignal<Option<i64>>,
}

impl AgencyContext {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(storage::load_agency()),
        }
    }

    pub fn choose(&self, agency_id: i64) {
        storage::save_agency(agency_id);
        self.selected.set(Some(agency_id));
    }

    pub fn reset(&self) {
        storage::clear_agency();
        self.selected.set(None);
    }

    pub fn current(&self) -> Option<i64> {
        self.selected.get()
    }
}

impl Default for AgencyContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_agency() -> AgencyContext {
    use_context::<AgencyContext>().expect("AgencyContext not found in component tree")
}
