use contracts::domain::a002_warehouse::aggregate::Warehouse;
use contracts::domain::a002_warehouse::form::{WarehouseForm, STOCK_FIELDS};
use contracts::domain::a005_product::form::STOCK_RANGE_ERROR;
use contracts::shared::choices::find_choice;
use contracts::shared::endpoints;
use contracts::shared::form::FormMode;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::choices::named_choices;
use crate::shared::components::{ChoiceSelect, LineItemsTable, PreviewField, ValidatedInput};
use crate::shared::form_view::{save, FormViewModel, WizardFrame};
use crate::shared::line_editor::LineEditor;
use crate::shared::navigator::route_id;
use crate::system::agency::use_agency;
use crate::system::auth::use_auth;

/// Warehouse with the initial stock of each product it holds.
#[component]
pub fn WarehouseDetails() -> impl IntoView {
    let auth = use_auth();
    let agency = use_agency();
    let mode = FormMode::from_id(route_id());
    let mut initial = WarehouseForm::default();
    if let Some(current) = agency.current() {
        initial.agency = current.to_string();
    }
    let vm = FormViewModel::new(initial, mode);
    if let FormMode::Edit(id) = mode {
        vm.load(auth, endpoints::item(endpoints::WAREHOUSES, id), |w: Warehouse| {
            WarehouseForm::from(&w)
        });
    }

    let agencies = named_choices(endpoints::ALL_AGENCIES);
    let form = vm.form;
    let (name, on_name) = vm.field(|f| &f.name, |f| &mut f.name);
    let (location, on_location) = vm.field(|f| &f.location, |f| &mut f.location);
    let selected_agency = Signal::derive(move || form.with(|f| f.agency.clone()));
    let agency_name = Signal::derive(move || {
        let id = selected_agency.get();
        agencies.with(|a| find_choice(a, &id).map(|c| c.label.clone()).unwrap_or_default())
    });
    let lines = Signal::derive(move || form.with(|f| f.lines.clone()));
    let inverted = Memo::new(move |_| !form.with(|f| f.inverted_ranges().is_empty()));

    view! {
        <WizardFrame
            title=if mode.is_edit() { "Editar almacén" } else { "Agregar almacén" }
            page_id="a002_warehouse--details"
            wizard=vm.wizard
            back_path=paths::list(SECTION)
            on_next=Callback::new(move |_| {
                vm.next(auth, move |payload| save(endpoints::WAREHOUSES, mode, payload))
            })
            ready=Signal::derive(move || vm.is_ready())
            loading=vm.loading
            load_error=vm.load_error
            form=move || view! {
                <ValidatedInput label="Nombre" field=name on_action=on_name />
                <ValidatedInput label="Dirección" field=location on_action=on_location />
                <ChoiceSelect
                    label="Agencia"
                    value=selected_agency
                    options=agencies
                    on_change=Callback::new(move |id| form.update(|f| f.agency = id))
                    feedback="Seleccione una agencia"
                />
                <LineEditor
                    form=form
                    columns=&STOCK_FIELDS
                    scope=Signal::derive(|| Some(WarehouseForm::SCOPE))
                />
                <Show when=move || inverted.get()>
                    <div class="form__feedback">{STOCK_RANGE_ERROR}</div>
                </Show>
            }
            preview=move || view! {
                <PreviewField label="Nombre" value=Signal::derive(move || name.with(|f| f.value.clone())) />
                <PreviewField label="Dirección" value=Signal::derive(move || location.with(|f| f.value.clone())) />
                <PreviewField label="Agencia" value=agency_name />
                <LineItemsTable items=lines columns=&STOCK_FIELDS read_only=true />
            }
        />
    }
}
