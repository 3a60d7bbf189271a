use contracts::domain::common::document::Stepper;
use leptos::prelude::*;

/// Horizontal lifecycle of a purchase or sale.
#[component]
pub fn DocumentStepper(stepper: Stepper) -> impl IntoView {
    let active = stepper.active;
    view! {
        <ol class="stepper">
            {stepper.stages.into_iter().enumerate().map(|(index, stage)| {
                let done = index < active;
                view! {
                    <li class="stepper__stage" class:stepper__stage--done=done>
                        <span class="stepper__index">{index + 1}</span>
                        <span class="stepper__label">{stage.label}</span>
                        {(!stage.date.is_empty()).then(|| view! {
                            <span class="stepper__date">{stage.date}</span>
                        })}
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}
