use contracts::domain::a005_product::form::ProductForm;
use contracts::shared::choices::find_choice;
use contracts::shared::endpoints;
use contracts::shared::form::{FieldAction, FormMode, ValidatedField};
use leptos::prelude::*;
use web_sys::HtmlInputElement;

use super::super::super::SECTION;
use super::view_model::ProductDetailsViewModel;
use crate::routes::paths;
use crate::shared::choices::named_choices;
use crate::shared::components::{ChoiceSelect, PreviewField, ValidatedInput};
use crate::shared::config::api_url;
use crate::shared::form_view::WizardFrame;
use crate::shared::navigator::route_id;
use crate::system::auth::use_auth;

type Accessor = (
    &'static str,
    fn(&ProductForm) -> &ValidatedField,
    fn(&mut ProductForm) -> &mut ValidatedField,
    &'static str,
);

const FIELDS: [Accessor; 8] = [
    ("Nombre", |f| &f.name, |f| &mut f.name, "text"),
    ("Código", |f| &f.code, |f| &mut f.code, "text"),
    ("Stock", |f| &f.stock, |f| &mut f.stock, "number"),
    ("Stock mínimo", |f| &f.minimum_stock, |f| &mut f.minimum_stock, "number"),
    ("Stock máximo", |f| &f.maximum_stock, |f| &mut f.maximum_stock, "number"),
    ("Precio mínimo de venta", |f| &f.minimum_sale_price, |f| &mut f.minimum_sale_price, "number"),
    ("Precio máximo de venta", |f| &f.maximum_sale_price, |f| &mut f.maximum_sale_price, "number"),
    ("Unidad de medida", |f| &f.unit_of_measurement, |f| &mut f.unit_of_measurement, "text"),
];

#[component]
pub fn ProductDetails() -> impl IntoView {
    let auth = use_auth();
    let mode = FormMode::from_id(route_id());
    let vm = ProductDetailsViewModel::new(mode);
    vm.load_if_needed(auth);
    let form = vm.base.form;

    let batches = named_choices(endpoints::ALL_BATCHES);
    let batch = Signal::derive(move || form.with(|f| f.batch.clone()));
    let batch_name = Signal::derive(move || {
        let id = batch.get();
        batches.with(|b| find_choice(b, &id).map(|c| c.label.clone()).unwrap_or_default())
    });
    let fields: Vec<(&'static str, Signal<ValidatedField>, Callback<FieldAction>, &'static str)> =
        FIELDS
            .iter()
            .map(|(label, get, get_mut, kind)| {
                let (field, on_action) = vm.base.field(*get, *get_mut);
                (*label, field, on_action, *kind)
            })
            .collect();
    let fields = StoredValue::new(fields);
    let description = Signal::derive(move || form.with(|f| f.description.clone()));
    let range_error = Memo::new(move |_| form.with(ProductForm::range_error));

    let on_file = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        vm.choose_image(input.files().and_then(|files| files.get(0)));
    };
    let picture = move || {
        let chosen = vm.image_name.get();
        let stored = form.with(|f| f.existing_image.clone());
        match (chosen, stored) {
            (Some(name), _) => view! { <span class="form__hint">{name}</span> }.into_any(),
            (None, Some(url)) => {
                let src = if url.starts_with("http") { url } else { api_url(&url) };
                view! { <img class="product__image" src=src alt="Imagen del producto" /> }.into_any()
            }
            (None, None) => view! { <span class="form__hint">"Sin imagen"</span> }.into_any(),
        }
    };

    view! {
        <WizardFrame
            title=if mode.is_edit() { "Editar producto" } else { "Agregar producto" }
            page_id="a005_product--details"
            wizard=vm.base.wizard
            back_path=paths::list(SECTION)
            on_next=Callback::new(move |_| vm.next(auth))
            ready=Signal::derive(move || vm.base.is_ready())
            loading=vm.base.loading
            load_error=vm.base.load_error
            form=move || view! {
                <ChoiceSelect
                    label="Lote"
                    value=batch
                    options=batches
                    on_change=Callback::new(move |id| form.update(|f| f.batch = id))
                    feedback="Seleccione un lote"
                />
                {fields.with_value(|fields| fields.iter().map(|(label, field, on_action, kind)| view! {
                    <ValidatedInput label=*label field=*field on_action=*on_action input_type=*kind />
                }).collect_view())}
                {move || range_error.get().map(|message| view! { <div class="form__feedback">{message}</div> })}
                <div class="form__group">
                    <label class="form__label">"Descripción"</label>
                    <textarea
                        class="form__input"
                        prop:value=description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Imagen"</label>
                    <input class="form__input" type="file" accept="image/*" on:change=on_file />
                    {picture}
                </div>
            }
            preview=move || view! {
                <PreviewField label="Lote" value=batch_name />
                {fields.with_value(|fields| fields.iter().map(|(label, field, _, _)| {
                    let field = *field;
                    view! { <PreviewField label=*label value=Signal::derive(move || field.with(|f| f.value.clone())) /> }
                }).collect_view())}
                <PreviewField label="Descripción" value=description />
                <div class="preview__field">{picture}</div>
            }
        />
    }
}
