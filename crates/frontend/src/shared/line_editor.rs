//! Product lines of a form: the picker plus the editable table.

use contracts::shared::line_items::{LineField, LineForm, PickerScope};
use leptos::prelude::*;

use crate::shared::components::LineItemsTable;
use crate::shared::product_picker::ProductPicker;

/// Binds [`ProductPicker`] and [`LineItemsTable`] to the lines of the form
/// held in `form`.
#[component]
pub fn LineEditor<F>(
    form: RwSignal<F>,
    columns: &'static [LineField],
    #[prop(into)] scope: Signal<Option<PickerScope>>,
    #[prop(optional)] with_totals: bool,
    #[prop(optional, into)] disabled_hint: MaybeProp<String>,
) -> impl IntoView
where
    F: LineForm + Send + Sync + 'static,
{
    let items = Signal::derive(move || form.with(|f| f.lines().clone()));
    let selected = Signal::derive(move || {
        form.with(|f| f.lines().items().iter().map(|l| l.product_id()).collect::<Vec<_>>())
    });

    let on_pick = Callback::new(move |product| {
        form.update(|f| {
            if !f.lines_mut().add(product) {
                log::debug!("product already in the lines");
            }
        })
    });
    let on_change = Callback::new(move |(product_id, field, value): (i64, LineField, String)| {
        form.update(|f| {
            f.lines_mut().change(product_id, field, value);
            f.lines_changed();
        })
    });
    let on_remove = Callback::new(move |product_id: i64| {
        form.update(|f| {
            f.lines_mut().remove(product_id);
            f.lines_changed();
        })
    });

    view! {
        <div class="line-editor">
            <ProductPicker scope=scope selected=selected on_pick=on_pick disabled_hint=disabled_hint />
            <LineItemsTable
                items=items
                columns=columns
                on_change=on_change
                on_remove=on_remove
                with_totals=with_totals
            />
        </div>
    }
}
