use crate::shared::icons::icon;

use leptos::ev;
use leptos::prelude::*;

fn closes_modal(key: &str) -> bool {
    key == "Escape"
}

/// Overlay dialog closed by Escape, the overlay or the close button.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if closes_modal(&event.key()) {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_escape_closes() {
        assert!(closes_modal("Escape"));
        assert!(!closes_modal("Enter"));
        assert!(!closes_modal("Esc"));
    }
}
