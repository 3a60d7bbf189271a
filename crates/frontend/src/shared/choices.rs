//! Options of the selects, fetched once per page.

use contracts::shared::choices::{Choice, NamedRef};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::http::{fetch_json, ApiRequest};

/// Options from an `.../all` endpoint (`[{id, name}]`).
pub fn named_choices(endpoint: &'static str) -> RwSignal<Vec<Choice>> {
    let choices = RwSignal::new(Vec::new());
    spawn_local(async move {
        match fetch_json::<Vec<NamedRef>>(ApiRequest::get(endpoint)).await {
            Ok(rows) => choices.set(rows.into_iter().map(Choice::from).collect()),
            Err(e) => log::warn!("choices from {endpoint} unavailable: {e}"),
        }
    });
    choices
}

/// Options from a `.../choices/` endpoint (`[{value, label}]`). `fallback`
/// stays in place if the call fails.
pub fn value_choices(endpoint: &'static str, fallback: Vec<Choice>) -> RwSignal<Vec<Choice>> {
    let choices = RwSignal::new(fallback);
    spawn_local(async move {
        match fetch_json::<Vec<Choice>>(ApiRequest::get(endpoint)).await {
            Ok(rows) if !rows.is_empty() => choices.set(rows),
            Ok(_) => {}
            Err(e) => log::warn!("choices from {endpoint} unavailable: {e}"),
        }
    });
    choices
}
