use contracts::domain::a003_category::aggregate::Category;
use contracts::domain::a003_category::form::CategoryForm;
use contracts::shared::endpoints;
use contracts::shared::form::FormMode;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::components::{PreviewField, ValidatedInput};
use crate::shared::form_view::{save, FormViewModel, WizardFrame};
use crate::shared::navigator::route_id;
use crate::system::auth::use_auth;

#[component]
pub fn CategoryDetails() -> impl IntoView {
    let auth = use_auth();
    let mode = FormMode::from_id(route_id());
    let vm = FormViewModel::new(CategoryForm::default(), mode);
    if let FormMode::Edit(id) = mode {
        vm.load(auth, endpoints::item(endpoints::CATEGORIES, id), |c: Category| {
            CategoryForm::from(&c)
        });
    }
    let (name, on_name) = vm.field(|f| &f.name, |f| &mut f.name);

    view! {
        <WizardFrame
            title=if mode.is_edit() { "Editar categoria" } else { "Agregar categoria" }
            page_id="a003_category--details"
            wizard=vm.wizard
            back_path=paths::list(SECTION)
            on_next=Callback::new(move |_| {
                vm.next(auth, move |payload| save(endpoints::CATEGORIES, mode, payload))
            })
            ready=Signal::derive(move || vm.is_ready())
            loading=vm.loading
            load_error=vm.load_error
            form=move || view! { <ValidatedInput label="Nombre" field=name on_action=on_name /> }
            preview=move || view! {
                <PreviewField label="Nombre" value=Signal::derive(move || name.with(|f| f.value.clone())) />
            }
        />
    }
}
