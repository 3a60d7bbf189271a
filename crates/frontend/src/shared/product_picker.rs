//! Modal that adds catalog rows to a document's line items.

use contracts::shared::line_items::{CatalogItem, PickerScope};
use contracts::shared::list::{total_pages, FetchSequencer, ListParams, ListResponse};
use contracts::shared::number::{format_amount, format_quantity};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::{AbortController, AbortSignal};

use crate::shared::components::{Modal, PaginationControls, SearchInput};
use crate::shared::config::AppConfig;
use crate::shared::http::{fetch_json, ApiError, ApiRequest};
use crate::system::auth::use_auth;

struct CatalogPage {
    rows: Vec<CatalogItem>,
    total: usize,
}

async fn fetch_catalog(
    scope: PickerScope,
    params: ListParams,
    signal: Option<AbortSignal>,
) -> Result<CatalogPage, ApiError> {
    if scope.is_paginated() {
        let request = ApiRequest::get(scope.endpoint())
            .query(&params.to_query())
            .signal(signal);
        let page: ListResponse<CatalogItem> = fetch_json(request).await?;
        return Ok(CatalogPage {
            rows: page.rows,
            total: page.total,
        });
    }
    let request = ApiRequest::get(scope.endpoint())
        .pairs(&scope.query(&params.filter))
        .signal(signal);
    let rows: Vec<CatalogItem> = fetch_json(request).await?;
    let rows: Vec<CatalogItem> = rows.into_iter().filter(|r| scope.keep(r)).collect();
    Ok(CatalogPage {
        total: rows.len(),
        rows,
    })
}

fn amount_or_dash(value: Option<f64>, format: fn(f64) -> String) -> String {
    value.map(format).unwrap_or_else(|| "-".to_string())
}

/// "Agregar productos" button plus its modal. Rows whose product is already
/// in `selected` are shown disabled.
#[component]
pub fn ProductPicker(
    /// `None` while the form still lacks what the scope needs (e.g. the
    /// selling channel of a sale).
    #[prop(into)]
    scope: Signal<Option<PickerScope>>,
    #[prop(into)] selected: Signal<Vec<i64>>,
    on_pick: Callback<CatalogItem>,
    #[prop(optional, into)] disabled_hint: MaybeProp<String>,
) -> impl IntoView {
    let auth = use_auth();
    let config = AppConfig::load();
    let size_options = StoredValue::new(config.page_size_options.clone());
    let open = RwSignal::new(false);
    let mut initial = ListParams::default();
    initial.set_page_size(config.page_size);
    let params = RwSignal::new(initial);
    let rows = RwSignal::new(Vec::<CatalogItem>::new());
    let total = RwSignal::new(0usize);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let sequencer = StoredValue::new(FetchSequencer::default());
    let controller = StoredValue::new_local(None::<AbortController>);

    let abort_pending = move || {
        let _ = controller.try_update_value(|pending| {
            if let Some(c) = pending.take() {
                c.abort();
            }
        });
    };

    Effect::new(move |_| {
        let current_params = params.get();
        let Some(current_scope) = scope.get() else {
            return;
        };
        if !open.get() {
            return;
        }
        abort_pending();
        let Some(ticket) = sequencer.try_update_value(FetchSequencer::begin) else {
            return;
        };
        let pending = AbortController::new().ok();
        let signal = pending.as_ref().map(AbortController::signal);
        controller.set_value(pending);
        loading.set(true);
        spawn_local(async move {
            let result = fetch_catalog(current_scope, current_params, signal).await;
            if !sequencer.try_with_value(|s| s.is_current(ticket)).unwrap_or(false) {
                return;
            }
            loading.set(false);
            match result {
                Ok(page) => {
                    error.set(None);
                    total.set(page.total);
                    rows.set(page.rows);
                }
                Err(e) => {
                    if let Some(message) = auth.handle_error(&e) {
                        error.set(Some(message));
                    }
                }
            }
        });
    });

    let close = Callback::new(move |_: ()| {
        let _ = sequencer.try_update_value(FetchSequencer::cancel_all);
        abort_pending();
        open.set(false);
    });
    on_cleanup(move || close.run(()));

    let paginated = move || scope.with(|s| s.is_some_and(|s| s.is_paginated()));

    view! {
        <div class="product-picker">
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=Signal::derive(move || scope.with(Option::is_none))
                on_click=move |_| open.set(true)
            >
                "Agregar productos"
            </Button>
            {move || scope.with(Option::is_none).then(|| disabled_hint.get()).flatten().map(|hint| view! {
                <span class="form__hint">{hint}</span>
            })}
            <Show when=move || open.get()>
                <Modal title="Productos" on_close=close>
                    <SearchInput
                        value=Signal::derive(move || params.with(|p| p.filter.clone()))
                        on_change=Callback::new(move |text: String| params.update(|p| p.set_filter(text)))
                    />
                    {move || error.get().map(|message| view! { <div class="list-error">{message}</div> })}
                    <Show when=move || loading.get()>
                        <Spinner />
                    </Show>
                    <Table class="picker-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Producto"</TableHeaderCell>
                                <TableHeaderCell>"Código"</TableHeaderCell>
                                <TableHeaderCell>"Precio"</TableHeaderCell>
                                <TableHeaderCell>"Stock"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|item: &CatalogItem| item.id
                                children=move |item: CatalogItem| {
                                    let id = item.id;
                                    let taken = move || selected.with(|ids| ids.contains(&id));
                                    let price = amount_or_dash(item.price, format_amount);
                                    let stock = amount_or_dash(item.stock, format_quantity);
                                    let name = item.name.clone();
                                    let code = item.code.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{code}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{price}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{stock}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <Button
                                                    size=ButtonSize::Small
                                                    disabled=Signal::derive(taken)
                                                    on_click=move |_| on_pick.run(item.clone())
                                                >
                                                    {move || if taken() { "Agregado" } else { "Agregar" }}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=paginated>
                        <PaginationControls
                            current_page=Signal::derive(move || params.with(|p| p.page))
                            total_pages=Signal::derive(move || total_pages(total.get(), params.with(|p| p.page_size)))
                            total_count=total
                            page_size=Signal::derive(move || params.with(|p| p.page_size))
                            on_page_change=Callback::new(move |page| params.update(|p| p.set_page(page)))
                            on_page_size_change=Callback::new(move |size| params.update(|p| p.set_page_size(size)))
                            page_size_options=size_options.get_value()
                        />
                    </Show>
                </Modal>
            </Show>
        </div>
    }
}
