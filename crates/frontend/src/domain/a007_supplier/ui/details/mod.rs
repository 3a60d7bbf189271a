use contracts::domain::a007_supplier::aggregate::Supplier;
use contracts::domain::a007_supplier::form::SupplierForm;
use contracts::shared::endpoints;
use contracts::shared::form::FormMode;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::components::{LineItemsTable, PreviewField, ValidatedInput};
use crate::shared::form_view::{field_value, save, FormViewModel, WizardFrame};
use crate::shared::line_editor::LineEditor;
use crate::shared::navigator::route_id;
use crate::system::auth::use_auth;

/// Supplier and the products it sells.
#[component]
pub fn SupplierDetails() -> impl IntoView {
    let auth = use_auth();
    let mode = FormMode::from_id(route_id());
    let vm = FormViewModel::new(SupplierForm::default(), mode);
    if let FormMode::Edit(id) = mode {
        vm.load(auth, endpoints::item(endpoints::SUPPLIERS, id), |s: Supplier| {
            SupplierForm::from(&s)
        });
    }

    let form = vm.form;
    let (name, on_name) = vm.field(|f| &f.name, |f| &mut f.name);
    let (phone, on_phone) = vm.field(|f| &f.phone, |f| &mut f.phone);
    let (nit, on_nit) = vm.field(|f| &f.nit, |f| &mut f.nit);
    let (email, on_email) = vm.field(|f| &f.email, |f| &mut f.email);
    let (address, on_address) = vm.field(|f| &f.address, |f| &mut f.address);
    let products = Signal::derive(move || form.with(|f| f.products.clone()));

    view! {
        <WizardFrame
            title=if mode.is_edit() { "Editar proveedor" } else { "Agregar proveedor" }
            page_id="a007_supplier--details"
            wizard=vm.wizard
            back_path=paths::list(SECTION)
            on_next=Callback::new(move |_| {
                vm.next(auth, move |payload| save(endpoints::SUPPLIERS, mode, payload))
            })
            ready=Signal::derive(move || vm.is_ready())
            loading=vm.loading
            load_error=vm.load_error
            form=move || view! {
                <ValidatedInput label="Nombre" field=name on_action=on_name />
                <ValidatedInput label="Teléfono" field=phone on_action=on_phone />
                <ValidatedInput label="NIT" field=nit on_action=on_nit />
                <ValidatedInput label="Correo" field=email on_action=on_email input_type="email" />
                <ValidatedInput label="Dirección" field=address on_action=on_address />
                <LineEditor form=form columns=&[] scope=Signal::derive(|| Some(SupplierForm::SCOPE)) />
            }
            preview=move || view! {
                <PreviewField label="Nombre" value=field_value(name) />
                <PreviewField label="Teléfono" value=field_value(phone) />
                <PreviewField label="NIT" value=field_value(nit) />
                <PreviewField label="Correo" value=field_value(email) />
                <PreviewField label="Dirección" value=field_value(address) />
                <LineItemsTable items=products columns=&[] read_only=true />
            }
        />
    }
}
