//! Amount, date and method inputs shared by every form that takes a payment.

use contracts::domain::a014_payment::form::PaymentHolder;
use contracts::shared::choices::{label_for, to_choices, PAYMENT_METHODS};
use contracts::shared::form::{FieldAction, ValidatedField};
use leptos::prelude::*;

use crate::shared::components::{ChoiceSelect, PreviewField, ValidatedInput};
use crate::shared::form_view::field_value;

#[component]
pub fn PaymentFields<F>(form: RwSignal<F>) -> impl IntoView
where
    F: PaymentHolder + Send + Sync + 'static,
{
    let amount = Signal::derive(move || form.with(|f| f.payment().amount.clone()));
    let on_amount = Callback::new(move |action| match action {
        FieldAction::Change(value) => form.update(|f| f.change_payment_amount(value)),
        other => form.update(|f| f.payment_mut().amount.dispatch(other)),
    });
    let date = Signal::derive(move || form.with(|f| f.payment().payment_date.clone()));
    let on_date = Callback::new(move |action| form.update(|f| f.payment_mut().payment_date.dispatch(action)));
    let method = Signal::derive(move || form.with(|f| f.payment().payment_method.clone()));

    view! {
        <fieldset class="form__section">
            <legend>"Pago"</legend>
            <ValidatedInput label="Monto" field=amount on_action=on_amount input_type="number" />
            <ValidatedInput label="Fecha de pago" field=date on_action=on_date input_type="date" />
            <ChoiceSelect
                label="Método de pago"
                value=method
                options=Signal::derive(|| to_choices(&PAYMENT_METHODS))
                on_change=Callback::new(move |value| form.update(|f| f.payment_mut().payment_method = value))
            />
        </fieldset>
    }
}

#[component]
pub fn PaymentPreview<F>(form: RwSignal<F>) -> impl IntoView
where
    F: PaymentHolder + Send + Sync + 'static,
{
    let read = move |get: fn(&F) -> &ValidatedField| {
        field_value(Signal::derive(move || form.with(|f| get(f).clone())))
    };
    let method = Signal::derive(move || {
        form.with(|f| label_for(&PAYMENT_METHODS, &f.payment().payment_method))
    });

    view! {
        <PreviewField label="Monto" value=read(|f| &f.payment().amount) />
        <PreviewField label="Fecha de pago" value=read(|f| &f.payment().payment_date) />
        <PreviewField label="Método de pago" value=method />
    }
}
