use contracts::shared::line_items::{LineField, LineItem, LineItems};
use contracts::shared::number::format_amount;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Products chosen for a document with their editable columns.
///
/// Rows are keyed by product id, so every cell reads its line back from
/// `items` to stay current while the user types.
#[component]
pub fn LineItemsTable(
    #[prop(into)] items: Signal<LineItems>,
    columns: &'static [LineField],
    #[prop(optional)] on_change: Option<Callback<(i64, LineField, String)>>,
    #[prop(optional)] on_remove: Option<Callback<i64>>,
    /// Subtotal, total and grand total columns.
    #[prop(optional)]
    with_totals: bool,
    #[prop(optional)] read_only: bool,
) -> impl IntoView {
    let line = move |id: i64| {
        items.with(|list| list.items().iter().find(|l| l.product_id() == id).cloned())
    };
    let editable = on_change.filter(|_| !read_only);

    view! {
        <Table class="line-items">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Producto"</TableHeaderCell>
                    <TableHeaderCell>"Código"</TableHeaderCell>
                    {columns.iter().map(|c| view! { <TableHeaderCell>{c.label()}</TableHeaderCell> }).collect_view()}
                    {with_totals.then(|| view! {
                        <TableHeaderCell>"Subtotal"</TableHeaderCell>
                        <TableHeaderCell>"Total"</TableHeaderCell>
                    })}
                    {on_remove.filter(|_| !read_only).map(|_| view! { <TableHeaderCell>""</TableHeaderCell> })}
                </TableRow>
            </TableHeader>
            <TableBody>
                <For
                    each=move || items.get().items().to_vec()
                    key=LineItem::product_id
                    children=move |item: LineItem| {
                        let id = item.product_id();
                        let cells = columns.iter().copied().map(|field| {
                            let value = move || line(id).map(|l| l.field(field).value.clone()).unwrap_or_default();
                            let feedback = move || line(id).and_then(|l| l.field(field).feedback().map(str::to_string));
                            match editable {
                                Some(on_change) => view! {
                                    <TableCell>
                                        <input
                                            class="line-input"
                                            class:line-input--invalid=move || feedback().is_some()
                                            type=if field.is_date() { "date" } else { "text" }
                                            prop:value=value
                                            on:input=move |ev| on_change.run((id, field, event_target_value(&ev)))
                                        />
                                        {move || feedback().map(|m| view! { <div class="form__feedback">{m}</div> })}
                                    </TableCell>
                                }.into_any(),
                                None => view! {
                                    <TableCell><TableCellLayout>{value}</TableCellLayout></TableCell>
                                }.into_any(),
                            }
                        }).collect_view();
                        let amount = move |pick: fn(&LineItem) -> Option<f64>| {
                            line(id).and_then(|l| pick(&l)).map(format_amount).unwrap_or_else(|| "-".to_string())
                        };
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{item.product.name.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{item.product.code.clone()}</TableCellLayout></TableCell>
                                {cells}
                                {with_totals.then(|| view! {
                                    <TableCell><TableCellLayout>{move || amount(LineItem::sub_total)}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{move || amount(LineItem::total)}</TableCellLayout></TableCell>
                                })}
                                {on_remove.filter(|_| !read_only).map(|on_remove| view! {
                                    <TableCell>
                                        <button class="button button--icon" title="Quitar" on:click=move |_| on_remove.run(id)>
                                            {icon("trash")}
                                        </button>
                                    </TableCell>
                                })}
                            </TableRow>
                        }
                    }
                />
            </TableBody>
        </Table>
        {with_totals.then(|| view! {
            <div class="line-items__total">
                "Total: " {move || items.with(|l| format_amount(l.grand_total()))}
            </div>
        })}
    }
}
