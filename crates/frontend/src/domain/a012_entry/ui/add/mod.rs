use contracts::domain::a010_purchase::aggregate::Purchase;
use contracts::domain::a012_entry::form::EntryForm;
use contracts::shared::endpoints;
use contracts::shared::form::FormMode;
use contracts::shared::line_items::LineField;
use leptos::prelude::*;

use crate::domain::a010_purchase;
use crate::routes::paths;
use crate::shared::components::{LineItemsTable, PreviewField, ValidatedInput};
use crate::shared::form_view::{field_value, FormViewModel, WizardFrame};
use crate::shared::http::{send, ApiRequest};
use crate::shared::line_editor::LineEditor;
use crate::shared::navigator::route_id;
use crate::system::agency::use_agency;
use crate::system::auth::use_auth;

const COLUMNS: [LineField; 1] = [LineField::Quantity];

/// Receives goods of the purchase in the route into the selected agency.
#[component]
pub fn EntryAdd() -> impl IntoView {
    let auth = use_auth();
    let agency = use_agency().current().unwrap_or_default();
    let id = route_id().unwrap_or_default();
    let vm = FormViewModel::new(EntryForm::new(id, agency), FormMode::Create);
    let supplier_name = RwSignal::new(String::new());
    vm.load(auth, endpoints::item(endpoints::PURCHASES, id), move |p: Purchase| {
        supplier_name.set(p.supplier_name());
        EntryForm::for_purchase(&p, agency)
    });

    let form = vm.form;
    let (date, on_date) = vm.field(|f| &f.entry_date, |f| &mut f.entry_date);
    let (invoice, on_invoice) = vm.field(|f| &f.invoice_number, |f| &mut f.invoice_number);
    let lines = Signal::derive(move || form.with(|f| f.lines.clone()));
    let scope = Signal::derive(move || Some(form.with(EntryForm::scope)));
    let on_next = Callback::new(move |_| {
        vm.next(auth, |payload| async move {
            send(ApiRequest::post(endpoints::ENTRIES).json(&payload)?).await
        })
    });

    view! {
        <WizardFrame
            title="Registrar entrada"
            page_id="a012_entry--details"
            wizard=vm.wizard
            back_path=paths::list(a010_purchase::SECTION)
            on_next=on_next
            ready=Signal::derive(move || vm.is_ready())
            loading=vm.loading
            load_error=vm.load_error
            form=move || view! {
                <PreviewField label="Proveedor" value=supplier_name />
                <div class="form__row">
                    <ValidatedInput label="Fecha de entrada" field=date on_action=on_date input_type="date" />
                    <ValidatedInput label="Número de factura" field=invoice on_action=on_invoice />
                </div>
                <LineEditor form=form columns=&COLUMNS scope=scope />
            }
            preview=move || view! {
                <PreviewField label="Proveedor" value=supplier_name />
                <PreviewField label="Fecha de entrada" value=field_value(date) />
                <PreviewField label="Número de factura" value=field_value(invoice) />
                <LineItemsTable items=lines columns=&COLUMNS read_only=true />
            }
        />
    }
}
