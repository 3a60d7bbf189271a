use contracts::shared::choices::Choice;
use leptos::prelude::*;

/// Select over `{value, label}` options with an empty first entry.
#[component]
pub fn ChoiceSelect(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<Choice>>,
    on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    /// Shown under the select while no option is chosen.
    #[prop(optional, into)]
    feedback: MaybeProp<String>,
) -> impl IntoView {
    let missing = move || value.with(String::is_empty);

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=missing>"Seleccione..."</option>
                <For
                    each=move || options.get()
                    key=|choice| choice.value.clone()
                    children=move |choice| {
                        let current = choice.value.clone();
                        view! {
                            <option value=choice.value selected=move || value.get() == current>
                                {choice.label}
                            </option>
                        }
                    }
                />
            </select>
            {move || feedback.get().filter(|_| missing()).map(|message| view! {
                <div class="form__hint">{message}</div>
            })}
        </div>
    }
}
