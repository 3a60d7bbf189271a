use contracts::domain::a004_batch::aggregate::Batch;
use contracts::domain::a004_batch::form::BatchForm;
use contracts::shared::choices::find_choice;
use contracts::shared::endpoints;
use contracts::shared::form::FormMode;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::choices::named_choices;
use crate::shared::components::{ChoiceSelect, PreviewField, ValidatedInput};
use crate::shared::form_view::{save, FormViewModel, WizardFrame};
use crate::shared::navigator::route_id;
use crate::system::auth::use_auth;

#[component]
pub fn BatchDetails() -> impl IntoView {
    let auth = use_auth();
    let mode = FormMode::from_id(route_id());
    let vm = FormViewModel::new(BatchForm::default(), mode);
    if let FormMode::Edit(id) = mode {
        vm.load(auth, endpoints::item(endpoints::BATCHES, id), |b: Batch| BatchForm::from(&b));
    }

    let categories = named_choices(endpoints::ALL_CATEGORIES);
    let (name, on_name) = vm.field(|f| &f.name, |f| &mut f.name);
    let category = Signal::derive(move || vm.form.with(|f| f.category.clone()));
    let category_name = Signal::derive(move || {
        let id = category.get();
        categories.with(|c| find_choice(c, &id).map(|c| c.label.clone()).unwrap_or_default())
    });

    view! {
        <WizardFrame
            title=if mode.is_edit() { "Editar lote" } else { "Agregar lote" }
            page_id="a004_batch--details"
            wizard=vm.wizard
            back_path=paths::list(SECTION)
            on_next=Callback::new(move |_| {
                vm.next(auth, move |payload| save(endpoints::BATCHES, mode, payload))
            })
            ready=Signal::derive(move || vm.is_ready())
            loading=vm.loading
            load_error=vm.load_error
            form=move || view! {
                <ValidatedInput label="Nombre" field=name on_action=on_name />
                <ChoiceSelect
                    label="Categoria"
                    value=category
                    options=categories
                    on_change=Callback::new(move |id| vm.form.update(|f| f.category = id))
                    feedback="Seleccione una categoria"
                />
            }
            preview=move || view! {
                <PreviewField label="Nombre" value=Signal::derive(move || name.with(|f| f.value.clone())) />
                <PreviewField label="Categoria" value=category_name />
            }
        />
    }
}
