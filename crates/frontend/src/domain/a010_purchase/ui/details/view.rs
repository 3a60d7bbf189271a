use contracts::domain::a010_purchase::form::{PurchaseForm, LINE_FIELDS};
use contracts::shared::choices::{to_choices, TRANSACTION_TYPES};
use leptos::prelude::*;

use super::super::super::SECTION;
use super::view_model::PurchaseAddViewModel;
use crate::domain::a014_payment::ui::fields::{PaymentFields, PaymentPreview};
use crate::routes::paths;
use crate::shared::components::{ChoiceSelect, LineItemsTable, PreviewField, ValidatedInput};
use crate::shared::form_view::{field_value, WizardFrame};
use crate::shared::line_editor::LineEditor;
use crate::system::agency::use_agency;
use crate::system::auth::use_auth;

#[component]
pub fn PurchaseAdd() -> impl IntoView {
    let auth = use_auth();
    let agency = use_agency().current().unwrap_or_default();
    let vm = PurchaseAddViewModel::new(agency);
    let form = vm.base.form;

    let (date, on_date) = vm.base.field(|f| &f.purchase_date, |f| &mut f.purchase_date);
    let (invoice, on_invoice) = vm.base.field(|f| &f.invoice_number, |f| &mut f.invoice_number);
    let supplier = Signal::derive(move || form.with(|f| f.supplier.clone()));
    let purchase_type = Signal::derive(move || form.with(|f| f.purchase_type.clone()));
    let lines = Signal::derive(move || form.with(|f| f.lines.clone()));
    let scope = Signal::derive(move || Some(form.with(PurchaseForm::scope)));
    let total = Signal::derive(move || vm.total());

    view! {
        <WizardFrame
            title="Agregar compra"
            page_id="a010_purchase--details"
            wizard=vm.base.wizard
            back_path=paths::list(SECTION)
            on_next=Callback::new(move |_| vm.next(auth))
            ready=Signal::derive(move || vm.base.is_ready())
            form=move || view! {
                <div class="form__row">
                    <ChoiceSelect
                        label="Proveedor"
                        value=supplier
                        options=vm.suppliers
                        on_change=Callback::new(move |id| form.update(|f| f.supplier = id))
                        feedback="Seleccione un proveedor"
                    />
                    <ValidatedInput label="Fecha de compra" field=date on_action=on_date input_type="date" />
                    <ValidatedInput label="Número de factura" field=invoice on_action=on_invoice />
                    <ChoiceSelect
                        label="Tipo de compra"
                        value=purchase_type
                        options=Signal::derive(|| to_choices(&TRANSACTION_TYPES))
                        on_change=Callback::new(move |kind| form.update(|f| f.purchase_type = kind))
                    />
                </div>
                <LineEditor form=form columns=&LINE_FIELDS scope=scope with_totals=true />
                <PaymentFields form=form />
                <PreviewField label="Total" value=total />
            }
            preview=move || view! {
                <PreviewField label="Proveedor" value=Signal::derive(move || vm.supplier_name()) />
                <PreviewField label="Fecha de compra" value=field_value(date) />
                <PreviewField label="Número de factura" value=field_value(invoice) />
                <PreviewField label="Tipo de compra" value=Signal::derive(move || vm.type_label()) />
                <LineItemsTable items=lines columns=&LINE_FIELDS with_totals=true read_only=true />
                <PaymentPreview form=form />
                <PreviewField label="Total" value=total />
            }
        />
    }
}
