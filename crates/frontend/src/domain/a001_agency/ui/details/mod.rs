use contracts::domain::a001_agency::aggregate::Agency;
use contracts::domain::a001_agency::form::AgencyForm;
use contracts::shared::choices::find_choice;
use contracts::shared::endpoints;
use contracts::shared::form::FormMode;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::choices::value_choices;
use crate::shared::components::{ChoiceSelect, PreviewField, ValidatedInput};
use crate::shared::form_view::{save, FormViewModel, WizardFrame};
use crate::shared::navigator::route_id;
use crate::system::auth::use_auth;

/// Add and edit page of an agency.
#[component]
pub fn AgencyDetails() -> impl IntoView {
    let auth = use_auth();
    let mode = FormMode::from_id(route_id());
    let vm = FormViewModel::new(AgencyForm::default(), mode);
    if let FormMode::Edit(id) = mode {
        vm.load(auth, endpoints::item(endpoints::AGENCIES, id), |a: Agency| {
            AgencyForm::from(&a)
        });
    }

    let cities = value_choices(endpoints::CITY_CHOICES, Vec::new());
    let (name, on_name) = vm.field(|f| &f.name, |f| &mut f.name);
    let (location, on_location) = vm.field(|f| &f.location, |f| &mut f.location);
    let city = Signal::derive(move || vm.form.with(|f| f.city.clone()));
    let city_label = Signal::derive(move || {
        let code = city.get();
        cities.with(|c| find_choice(c, &code).map(|c| c.label.clone()).unwrap_or(code))
    });

    let on_next = Callback::new(move |_| {
        vm.next(auth, move |payload| save(endpoints::AGENCIES, mode, payload))
    });
    let title = if mode.is_edit() { "Editar agencia" } else { "Agregar agencia" };

    view! {
        <WizardFrame
            title=title
            page_id="a001_agency--details"
            wizard=vm.wizard
            back_path=paths::list(SECTION)
            on_next=on_next
            ready=Signal::derive(move || vm.is_ready())
            loading=vm.loading
            load_error=vm.load_error
            form=move || view! {
                <ValidatedInput label="Nombre" field=name on_action=on_name />
                <ValidatedInput label="Dirección" field=location on_action=on_location />
                <ChoiceSelect
                    label="Ciudad"
                    value=city
                    options=cities
                    on_change=Callback::new(move |code| vm.form.update(|f| f.city = code))
                    feedback="Seleccione una ciudad"
                />
            }
            preview=move || view! {
                <PreviewField label="Nombre" value=Signal::derive(move || name.with(|f| f.value.clone())) />
                <PreviewField label="Dirección" value=Signal::derive(move || location.with(|f| f.value.clone())) />
                <PreviewField label="Ciudad" value=city_label />
            }
        />
    }
}
