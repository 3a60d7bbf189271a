use contracts::domain::a006_product_stock::aggregate::ProductStock;
use contracts::domain::a006_product_stock::form::DamagedStockForm;
use contracts::domain::common::label_of;
use contracts::shared::endpoints;
use contracts::shared::form::{FieldAction, FormMode};
use contracts::shared::number::format_quantity;
use leptos::prelude::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::components::{PreviewField, ValidatedInput};
use crate::shared::form_view::{FormViewModel, WizardFrame};
use crate::shared::http::{send, ApiRequest};
use crate::shared::navigator::route_id;
use crate::system::auth::use_auth;

/// Moves units of one product stock to the damaged count.
#[component]
pub fn DamagedStockPage() -> impl IntoView {
    let auth = use_auth();
    let id = route_id().unwrap_or_default();
    let vm = FormViewModel::new(DamagedStockForm::default(), FormMode::Create);
    let stock = RwSignal::new(None::<ProductStock>);
    vm.load(auth, endpoints::item(endpoints::PRODUCT_STOCKS, id), move |s: ProductStock| {
        let form = DamagedStockForm::from(&s);
        stock.set(Some(s));
        form
    });

    let form = vm.form;
    let quantity = Signal::derive(move || form.with(|f| f.quantity.clone()));
    let on_quantity = Callback::new(move |action| match action {
        FieldAction::Change(value) => form.update(|f| f.change_quantity(value)),
        other => form.update(|f| f.quantity.dispatch(other)),
    });
    let info = move |read: fn(&ProductStock) -> String| {
        Signal::derive(move || stock.with(|s| s.as_ref().map(read).unwrap_or_default()))
    };
    let product = info(|s| format!("{} ({})", s.products.name, s.products.code));
    let warehouse = info(|s| label_of(&s.warehouses));
    let available = info(|s| format_quantity(s.available_stock));
    let damaged = info(|s| format_quantity(s.damaged_stock));

    let on_next = Callback::new(move |_| {
        vm.next(auth, move |payload| async move {
            send(ApiRequest::post(endpoints::increment_damaged_stock(id)).json(&payload)?).await
        })
    });

    view! {
        <WizardFrame
            title="Registrar producto dañado"
            page_id="a006_product_stock--damaged"
            wizard=vm.wizard
            back_path=paths::list(SECTION)
            on_next=on_next
            ready=Signal::derive(move || vm.is_ready())
            loading=vm.loading
            load_error=vm.load_error
            form=move || view! {
                <PreviewField label="Producto" value=product />
                <PreviewField label="Almacén" value=warehouse />
                <PreviewField label="Stock disponible" value=available />
                <PreviewField label="Stock dañado" value=damaged />
                <ValidatedInput label="Cantidad" field=quantity on_action=on_quantity input_type="number" />
            }
            preview=move || view! {
                <PreviewField label="Producto" value=product />
                <PreviewField label="Almacén" value=warehouse />
                <PreviewField
                    label="Cantidad dañada"
                    value=Signal::derive(move || quantity.with(|q| q.value.clone()))
                />
            }
        />
    }
}
