use contracts::domain::a008_client::aggregate::Client;
use contracts::domain::a008_client::form::ClientForm;
use contracts::shared::choices::{find_choice, to_choices, CLIENT_TYPES};
use contracts::shared::endpoints;
use contracts::shared::form::FormMode;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::choices::value_choices;
use crate::shared::components::{ChoiceSelect, PreviewField, ValidatedInput};
use crate::shared::form_view::{field_value, save, FormViewModel, WizardFrame};
use crate::shared::navigator::route_id;
use crate::system::auth::use_auth;

#[component]
pub fn ClientDetails() -> impl IntoView {
    let auth = use_auth();
    let mode = FormMode::from_id(route_id());
    let vm = FormViewModel::new(ClientForm::default(), mode);
    if let FormMode::Edit(id) = mode {
        vm.load(auth, endpoints::item(endpoints::CLIENTS, id), |c: Client| ClientForm::from(&c));
    }

    let client_types = value_choices(endpoints::CLIENT_CHOICES, to_choices(&CLIENT_TYPES));
    let (name, on_name) = vm.field(|f| &f.name, |f| &mut f.name);
    let (phone, on_phone) = vm.field(|f| &f.phone, |f| &mut f.phone);
    let (nit, on_nit) = vm.field(|f| &f.nit, |f| &mut f.nit);
    let (email, on_email) = vm.field(|f| &f.email, |f| &mut f.email);
    let (address, on_address) = vm.field(|f| &f.address, |f| &mut f.address);
    let client_type = Signal::derive(move || vm.form.with(|f| f.client_type.clone()));
    let client_type_label = Signal::derive(move || {
        let value = client_type.get();
        client_types.with(|c| find_choice(c, &value).map(|c| c.label.clone()).unwrap_or(value))
    });

    view! {
        <WizardFrame
            title=if mode.is_edit() { "Editar cliente" } else { "Agregar cliente" }
            page_id="a008_client--details"
            wizard=vm.wizard
            back_path=paths::list(SECTION)
            on_next=Callback::new(move |_| {
                vm.next(auth, move |payload| save(endpoints::CLIENTS, mode, payload))
            })
            ready=Signal::derive(move || vm.is_ready())
            loading=vm.loading
            load_error=vm.load_error
            form=move || view! {
                <ValidatedInput label="Nombre" field=name on_action=on_name />
                <ValidatedInput label="Teléfono" field=phone on_action=on_phone />
                <ValidatedInput label="CI/NIT" field=nit on_action=on_nit />
                <ValidatedInput label="Correo" field=email on_action=on_email input_type="email" />
                <ValidatedInput label="Dirección" field=address on_action=on_address />
                <ChoiceSelect
                    label="Tipo de cliente"
                    value=client_type
                    options=client_types
                    on_change=Callback::new(move |value| vm.form.update(|f| f.client_type = value))
                    feedback="Seleccione un tipo de cliente"
                />
            }
            preview=move || view! {
                <PreviewField label="Nombre" value=field_value(name) />
                <PreviewField label="Teléfono" value=field_value(phone) />
                <PreviewField label="CI/NIT" value=field_value(nit) />
                <PreviewField label="Correo" value=field_value(email) />
                <PreviewField label="Dirección" value=field_value(address) />
                <PreviewField label="Tipo de cliente" value=client_type_label />
            }
        />
    }
}
