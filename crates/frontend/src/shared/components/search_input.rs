use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::icons::icon;

const DEBOUNCE_MS: u32 = 300;

/// Filter box. Typing is debounced; the clear button reports at once.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |text: String| {
        set_input_value.set(text.clone());
        // replacing the handle cancels the previous timer
        let timeout = Timeout::new(DEBOUNCE_MS, move || on_change.run(text));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=move || !value.get().trim().is_empty()>
            <input
                type="text"
                class="search-input__field"
                placeholder=move || placeholder.get().unwrap_or_else(|| "Buscar...".to_string())
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Limpiar">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
