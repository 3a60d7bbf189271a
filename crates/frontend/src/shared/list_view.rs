//! Server-paginated list: params, fetch with abort, table and row actions.

use contracts::domain::common::ListRow;
use contracts::shared::list::{total_pages, FetchSequencer, ListParams, ListResponse};
use contracts::system::auth::Session;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;
use web_sys::AbortController;

use crate::shared::components::{PageHeader, PaginationControls, SearchInput};
use crate::shared::config::AppConfig;
use crate::shared::http::{fetch_json, ApiRequest};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::{use_auth, AuthContext};

/// Where a row button leads.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionTarget {
    /// Page inside the app.
    Route(String),
    /// API document opened in a new tab.
    NewTab(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub target: ActionTarget,
}

impl RowAction {
    pub fn route(label: &'static str, icon: &'static str, path: String) -> Self {
        Self {
            label,
            icon,
            target: ActionTarget::Route(path),
        }
    }

    pub fn new_tab(label: &'static str, icon: &'static str, api_path: String) -> Self {
        Self {
            label,
            icon,
            target: ActionTarget::NewTab(api_path),
        }
    }
}

pub type RowActions<T> = fn(&T, &Session) -> Vec<RowAction>;

pub struct ListViewModel<T: ListRow + Send + Sync> {
    pub params: RwSignal<ListParams>,
    pub rows: RwSignal<Vec<T>>,
    pub total: RwSignal<usize>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    sequencer: StoredValue<FetchSequencer>,
    controller: StoredValue<Option<AbortController>, LocalStorage>,
}

impl<T: ListRow + Send + Sync> Clone for ListViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ListRow + Send + Sync> Copy for ListViewModel<T> {}

impl<T: ListRow + Send + Sync> ListViewModel<T> {
    pub fn new(page_size: usize) -> Self {
        let mut params = ListParams::default();
        params.set_page_size(page_size);
        Self {
            params: RwSignal::new(params),
            rows: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            sequencer: StoredValue::new(FetchSequencer::default()),
            controller: StoredValue::new_local(None),
        }
    }

    /// Refetch on every params change; abort whatever is pending on unmount.
    pub fn mount(&self, auth: AuthContext) {
        let this = *self;
        Effect::new(move |_| {
            this.params.track();
            this.fetch(auth);
        });
        on_cleanup(move || this.cancel());
    }

    fn abort_pending(&self) {
        let _ = self.controller.try_update_value(|pending| {
            if let Some(controller) = pending.take() {
                controller.abort();
            }
        });
    }

    pub fn cancel(&self) {
        let _ = self.sequencer.try_update_value(FetchSequencer::cancel_all);
        self.abort_pending();
    }

    pub fn fetch(&self, auth: AuthContext) {
        self.abort_pending();
        let Some(ticket) = self.sequencer.try_update_value(FetchSequencer::begin) else {
            return;
        };
        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(AbortController::signal);
        self.controller.set_value(controller);

        let query = self.params.with_untracked(ListParams::to_query);
        log::debug!("list {} offset={} limit={}", T::ENDPOINT, query.offset, query.limit);
        self.loading.set(true);

        let this = *self;
        spawn_local(async move {
            let request = ApiRequest::get(T::ENDPOINT).query(&query).signal(signal);
            let result = fetch_json::<ListResponse<T>>(request).await;
            let current = this
                .sequencer
                .try_with_value(|s| s.is_current(ticket))
                .unwrap_or(false);
            if !current {
                return;
            }
            this.loading.set(false);
            match result {
                Ok(page) => {
                    this.error.set(None);
                    this.total.set(page.total);
                    this.rows.set(page.rows);
                }
                Err(e) => {
                    if let Some(message) = auth.handle_error(&e) {
                        log::warn!("list {} failed: {e}", T::ENDPOINT);
                        this.error.set(Some(message));
                    }
                }
            }
        });
    }

    pub fn set_page(&self, page: usize) {
        self.params.update(|p| p.set_page(page));
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.params.update(|p| p.set_page_size(page_size));
    }

    pub fn set_filter(&self, filter: String) {
        if self.params.with_untracked(|p| p.filter != filter) {
            self.params.update(|p| p.set_filter(filter));
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total.get(), self.params.with(|p| p.page_size))
    }
}

pub fn action_button(action: RowAction) -> AnyView {
    match action.target {
        ActionTarget::Route(path) => view! {
            <A href=path attr:class="button button--icon" attr:title=action.label>
                {icon(action.icon)}
            </A>
        }
        .into_any(),
        ActionTarget::NewTab(api_path) => view! {
            <a
                class="button button--icon"
                title=action.label
                href=crate::shared::config::api_url(&api_path)
                target="_blank"
                rel="noopener"
            >
                {icon(action.icon)}
            </a>
        }
        .into_any(),
    }
}

/// Full list page of one entity.
#[component]
pub fn ServerList<T>(
    title: &'static str,
    page_id: &'static str,
    /// Per-row buttons, decided with the current user's permissions.
    actions: RowActions<T>,
    /// Target of the "Agregar" button, hidden without `add_permission`.
    #[prop(optional)]
    add_path: Option<String>,
    #[prop(optional)] add_permission: Option<&'static str>,
) -> impl IntoView
where
    T: ListRow + Send + Sync,
{
    let auth = use_auth();
    let config = AppConfig::load();
    let vm = ListViewModel::<T>::new(config.page_size);
    vm.mount(auth);

    let can_add = move || add_permission.map_or(true, |p| auth.has_permission(p));
    let add_button = add_path.map(|path| {
        view! {
            <Show when=can_add>
                <A href=path.clone() attr:class="button button--primary">
                    {icon("plus")} " Agregar"
                </A>
            </Show>
        }
    });

    let table = move || {
        view! {
            <Table class="list-table">
                <TableHeader>
                    <TableRow>
                        {T::COLUMNS.iter().map(|c| view! { <TableHeaderCell>{*c}</TableHeaderCell> }).collect_view()}
                        <TableHeaderCell>"Acciones"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || vm.rows.get()
                        key=|row: &T| row.id()
                        children=move |row: T| {
                            let buttons = auth.session.with_untracked(|s| {
                                s.as_ref().map(|s| actions(&row, s)).unwrap_or_default()
                            });
                            view! {
                                <TableRow>
                                    {row.cells().into_iter().map(|cell| view! {
                                        <TableCell><TableCellLayout>{cell}</TableCellLayout></TableCell>
                                    }).collect_view()}
                                    <TableCell>
                                        <div class="row-actions">
                                            {buttons.into_iter().map(action_button).collect_view()}
                                        </div>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        }
    };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <PageHeader title=title>
                <SearchInput
                    value=Signal::derive(move || vm.params.with(|p| p.filter.clone()))
                    on_change=Callback::new(move |text: String| vm.set_filter(text))
                />
                {add_button}
            </PageHeader>
            <div class="page__content">
                {move || match vm.error.get() {
                    Some(message) => view! { <div class="list-error">{message}</div> }.into_any(),
                    None => view! {
                        <div class="list-body" class:list-body--loading=move || vm.loading.get()>
                            <Show when=move || vm.loading.get()>
                                <Spinner />
                            </Show>
                            {table()}
                            <PaginationControls
                                current_page=Signal::derive(move || vm.params.with(|p| p.page))
                                total_pages=Signal::derive(move || vm.total_pages())
                                total_count=vm.total
                                page_size=Signal::derive(move || vm.params.with(|p| p.page_size))
                                on_page_change=Callback::new(move |page| vm.set_page(page))
                                on_page_size_change=Callback::new(move |size| vm.set_page_size(size))
                                page_size_options=config.page_size_options.clone()
                            />
                        </div>
                    }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
