use contracts::domain::a009_selling_channel::aggregate::SellingChannel;
use contracts::domain::a009_selling_channel::form::SellingChannelForm;
use contracts::shared::endpoints;
use contracts::shared::form::FormMode;
use contracts::shared::line_items::LineField;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::components::{LineItemsTable, PreviewField, ValidatedInput};
use crate::shared::form_view::{field_value, save, FormViewModel, WizardFrame};
use crate::shared::line_editor::LineEditor;
use crate::shared::navigator::route_id;
use crate::system::auth::use_auth;

const PRICE_FIELDS: [LineField; 3] = [LineField::Price, LineField::StartDate, LineField::EndDate];

/// Selling channel with the price of each product sold through it.
#[component]
pub fn SellingChannelDetails() -> impl IntoView {
    let auth = use_auth();
    let mode = FormMode::from_id(route_id());
    let vm = FormViewModel::new(SellingChannelForm::default(), mode);
    if let FormMode::Edit(id) = mode {
        vm.load(auth, endpoints::item(endpoints::SELLING_CHANNELS, id), |c: SellingChannel| {
            SellingChannelForm::from(&c)
        });
    }

    let form = vm.form;
    let (name, on_name) = vm.field(|f| &f.name, |f| &mut f.name);
    let lines = Signal::derive(move || form.with(|f| f.lines.clone()));

    view! {
        <WizardFrame
            title=if mode.is_edit() { "Editar canal de venta" } else { "Agregar canal de venta" }
            page_id="a009_selling_channel--details"
            wizard=vm.wizard
            back_path=paths::list(SECTION)
            on_next=Callback::new(move |_| {
                vm.next(auth, move |payload| save(endpoints::SELLING_CHANNELS, mode, payload))
            })
            ready=Signal::derive(move || vm.is_ready())
            loading=vm.loading
            load_error=vm.load_error
            form=move || view! {
                <ValidatedInput label="Nombre" field=name on_action=on_name />
                <LineEditor
                    form=form
                    columns=&PRICE_FIELDS
                    scope=Signal::derive(|| Some(SellingChannelForm::SCOPE))
                />
            }
            preview=move || view! {
                <PreviewField label="Nombre" value=field_value(name) />
                <LineItemsTable items=lines columns=&PRICE_FIELDS read_only=true />
            }
        />
    }
}
