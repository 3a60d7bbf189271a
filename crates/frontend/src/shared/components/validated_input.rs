use contracts::shared::form::{FieldAction, ValidatedField};
use leptos::prelude::*;

/// Text input bound to a [`ValidatedField`]: typing sends `Change`, leaving
/// the input sends `Focus`.
#[component]
pub fn ValidatedInput(
    #[prop(into)] label: String,
    #[prop(into)] field: Signal<ValidatedField>,
    on_action: Callback<FieldAction>,
    #[prop(optional, into)] input_type: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let feedback = move || field.with(|f| f.feedback().map(str::to_string));

    view! {
        <div class="form__group" class:form__group--invalid=move || feedback().is_some()>
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get()
                prop:value=move || field.with(|f| f.value.clone())
                on:input=move |ev| on_action.run(FieldAction::Change(event_target_value(&ev)))
                on:blur=move |_| on_action.run(FieldAction::Focus)
            />
            {move || feedback().map(|message| view! {
                <div class="form__feedback">{message}</div>
            })}
        </div>
    }
}

/// Label/value pair of a read-only preview.
#[component]
pub fn PreviewField(#[prop(into)] label: String, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="preview__field">
            <span class="preview__label">{label}</span>
            <span class="preview__value">{move || value.get()}</span>
        </div>
    }
}
