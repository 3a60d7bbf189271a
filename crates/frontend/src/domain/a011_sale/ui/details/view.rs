use contracts::domain::a011_sale::form::{SaleForm, SaleMode};
use contracts::shared::choices::{label_for, to_choices, TRANSACTION_TYPES};
use contracts::shared::line_items::LineField;
use contracts::shared::number::format_amount;
use leptos::prelude::*;

use super::super::super::SECTION;
use super::view_model::SaleDetailsViewModel;
use crate::domain::a014_payment::ui::fields::{PaymentFields, PaymentPreview};
use crate::routes::paths;
use crate::shared::components::{ChoiceSelect, LineItemsTable, PreviewField, ValidatedInput};
use crate::shared::form_view::{field_value, WizardFrame};
use crate::shared::line_editor::LineEditor;
use crate::shared::navigator::route_id;
use crate::system::agency::use_agency;
use crate::system::auth::use_auth;

const SALE_COLUMNS: [LineField; 3] = [LineField::Quantity, LineField::Price, LineField::Discount];

#[component]
pub fn SaleDetails(sale_mode: SaleMode) -> impl IntoView {
    let auth = use_auth();
    let agency = use_agency().current().unwrap_or_default();
    let vm = SaleDetailsViewModel::new(sale_mode, route_id(), agency);
    vm.load_if_needed(auth, agency);
    let form = vm.base.form;
    let perform = sale_mode == SaleMode::Perform;

    let (sale_date, on_sale_date) = vm.base.field(|f| &f.sale_date, |f| &mut f.sale_date);
    let (perform_date, on_perform_date) =
        vm.base.field(|f| &f.sale_perform_date, |f| &mut f.sale_perform_date);
    let client = Signal::derive(move || form.with(|f| f.client.clone()));
    let channel = Signal::derive(move || form.with(|f| f.selling_channel.clone()));
    let sale_type = Signal::derive(move || form.with(|f| f.sale_type.clone()));
    let lines = Signal::derive(move || form.with(|f| f.lines.clone()));
    let scope = Signal::derive(move || form.with(SaleForm::scope));
    let total = Signal::derive(move || format_amount(form.with(SaleForm::total)));
    let client_name = Signal::derive(move || SaleDetailsViewModel::label_of(vm.clients, client.get()));
    let channel_name = Signal::derive(move || SaleDetailsViewModel::label_of(vm.channels, channel.get()));

    view! {
        <WizardFrame
            title=vm.title()
            page_id="a011_sale--details"
            wizard=vm.base.wizard
            back_path=paths::list(SECTION)
            on_next=Callback::new(move |_| vm.next(auth))
            ready=Signal::derive(move || vm.base.is_ready())
            loading=vm.base.loading
            load_error=vm.base.load_error
            form=move || view! {
                <div class="form__row">
                    <ChoiceSelect
                        label="Cliente"
                        value=client
                        options=vm.clients
                        on_change=Callback::new(move |id| form.update(|f| f.client = id))
                        disabled=perform
                        feedback="Seleccione un cliente"
                    />
                    <ChoiceSelect
                        label="Canal de venta"
                        value=channel
                        options=vm.channels
                        on_change=Callback::new(move |id| vm.change_channel(id))
                        disabled=perform
                        feedback="Seleccione un canal de venta"
                    />
                    <ValidatedInput
                        label="Fecha de venta"
                        field=sale_date
                        on_action=on_sale_date
                        input_type="date"
                        disabled=perform
                    />
                </div>
                <LineEditor
                    form=form
                    columns=&SALE_COLUMNS
                    scope=scope
                    with_totals=true
                    disabled_hint="Seleccione un canal de venta para agregar productos."
                />
                <PreviewField label="Total" value=total />
                <Show when=move || perform>
                    <div class="form__row">
                        <ValidatedInput
                            label="Fecha de realización"
                            field=perform_date
                            on_action=on_perform_date
                            input_type="date"
                        />
                        <ChoiceSelect
                            label="Tipo de venta"
                            value=sale_type
                            options=Signal::derive(|| to_choices(&TRANSACTION_TYPES))
                            on_change=Callback::new(move |kind| form.update(|f| f.sale_type = kind))
                            feedback="Seleccione el tipo de venta"
                        />
                    </div>
                    <PaymentFields form=form />
                </Show>
            }
            preview=move || view! {
                <PreviewField label="Cliente" value=client_name />
                <PreviewField label="Canal de venta" value=channel_name />
                <PreviewField label="Fecha de venta" value=field_value(sale_date) />
                <LineItemsTable items=lines columns=&SALE_COLUMNS with_totals=true read_only=true />
                <PreviewField label="Total" value=total />
                <Show when=move || perform>
                    <PreviewField label="Fecha de realización" value=field_value(perform_date) />
                    <PreviewField
                        label="Tipo de venta"
                        value=Signal::derive(move || label_for(&TRANSACTION_TYPES, &sale_type.get()))
                    />
                    <PaymentPreview form=form />
                </Show>
            }
        />
    }
}
