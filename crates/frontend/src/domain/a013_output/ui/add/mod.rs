use contracts::domain::a011_sale::aggregate::Sale;
use contracts::domain::a013_output::form::OutputForm;
use contracts::shared::endpoints;
use contracts::shared::form::FormMode;
use contracts::shared::line_items::LineField;
use leptos::prelude::*;

use crate::domain::a011_sale;
use crate::routes::paths;
use crate::shared::components::{LineItemsTable, PreviewField, ValidatedInput};
use crate::shared::form_view::{field_value, FormViewModel, WizardFrame};
use crate::shared::http::{send, ApiRequest};
use crate::shared::line_editor::LineEditor;
use crate::shared::navigator::route_id;
use crate::system::agency::use_agency;
use crate::system::auth::use_auth;

const COLUMNS: [LineField; 1] = [LineField::Quantity];

/// Dispatches goods of the performed sale in the route.
#[component]
pub fn OutputAdd() -> impl IntoView {
    let auth = use_auth();
    let agency = use_agency().current().unwrap_or_default();
    let id = route_id().unwrap_or_default();
    let vm = FormViewModel::new(OutputForm::new(id, agency), FormMode::Create);
    let client_name = RwSignal::new(String::new());
    vm.load(auth, endpoints::item(endpoints::SALES, id), move |s: Sale| {
        client_name.set(s.client_name());
        OutputForm::for_sale(&s, agency)
    });

    let form = vm.form;
    let (date, on_date) = vm.field(|f| &f.output_date, |f| &mut f.output_date);
    let lines = Signal::derive(move || form.with(|f| f.lines.clone()));
    let scope = Signal::derive(move || Some(form.with(OutputForm::scope)));
    let on_next = Callback::new(move |_| {
        vm.next(auth, |payload| async move {
            send(ApiRequest::post(endpoints::OUTPUTS).json(&payload)?).await
        })
    });

    view! {
        <WizardFrame
            title="Registrar salida"
            page_id="a013_output--details"
            wizard=vm.wizard
            back_path=paths::list(a011_sale::SECTION)
            on_next=on_next
            ready=Signal::derive(move || vm.is_ready())
            loading=vm.loading
            load_error=vm.load_error
            form=move || view! {
                <PreviewField label="Cliente" value=client_name />
                <ValidatedInput label="Fecha de salida" field=date on_action=on_date input_type="date" />
                <LineEditor form=form columns=&COLUMNS scope=scope />
            }
            preview=move || view! {
                <PreviewField label="Cliente" value=client_name />
                <PreviewField label="Fecha de salida" value=field_value(date) />
                <LineItemsTable items=lines columns=&COLUMNS read_only=true />
            }
        />
    }
}
