//! Read-only pages of one record, and forms that start from one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use serde::de::DeserializeOwned;
use thaw::*;

use crate::shared::components::PageHeader;
use crate::shared::http::{fetch_json, ApiRequest};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::system::auth::AuthContext;

pub struct DetailViewModel<T: Send + Sync + 'static> {
    pub record: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for DetailViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DetailViewModel<T> {}

impl<T> DetailViewModel<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            record: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self, auth: AuthContext, path: String) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match fetch_json::<T>(ApiRequest::get(path.as_str())).await {
                Ok(record) => this.record.set(Some(record)),
                Err(e) => {
                    if let Some(message) = auth.handle_error(&e) {
                        log::warn!("cannot load {path}: {e}");
                        this.error.set(Some(message));
                    }
                }
            }
            this.loading.set(false);
        });
    }

    /// Error line, spinner, or `body` once the record is there.
    pub fn render<V, F>(self, body: F) -> impl Fn() -> AnyView + Send + Sync + 'static
    where
        F: Fn(T) -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        move || {
            if let Some(message) = self.error.get() {
                return view! { <div class="form__error">{message}</div> }.into_any();
            }
            match self.record.get() {
                Some(record) => body(record).into_any(),
                None if self.loading.get() => view! { <Spinner /> }.into_any(),
                None => ().into_any(),
            }
        }
    }
}

impl<T> Default for DetailViewModel<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Chrome of a read-only page, with a link back to its list.
#[component]
pub fn DetailFrame(
    #[prop(into)] title: String,
    page_id: &'static str,
    #[prop(into)] back_path: String,
    children: Children,
) -> impl IntoView {
    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_DETAIL>
            <PageHeader title=title>
                <A href=back_path attr:class="button">{icon("chevron-left")} " Volver"</A>
            </PageHeader>
            <div class="page__content detail">{children()}</div>
        </PageFrame>
    }
}

/// Label and value of a detail header.
pub fn detail_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail__row">
            <span class="detail__label">{label}</span>
            <span class="detail__value">{value}</span>
        </div>
    }
}
