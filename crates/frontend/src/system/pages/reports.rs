use contracts::shared::report::{parse_range, ReportFormat, ReportKind};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::PageHeader;
use crate::shared::config::api_url;
use crate::shared::navigator::open_in_new_tab;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};

/// Date range and download buttons of one report.
#[component]
fn ReportCard(kind: ReportKind) -> impl IntoView {
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let generate = move |format: ReportFormat| {
        match parse_range(&start.get_untracked(), &end.get_untracked()) {
            Ok((from, to)) => {
                error.set(None);
                open_in_new_tab(&api_url(&kind.path(format, from, to)));
                start.set(String::new());
                end.set(String::new());
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <div class="report-card">
            <h2 class="report-card__title">{kind.title()}</h2>
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Fecha de inicio"</label>
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || start.get()
                        on:input=move |ev| start.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Fecha de fin"</label>
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || end.get()
                        on:input=move |ev| end.set(event_target_value(&ev))
                    />
                </div>
            </div>
            {move || error.get().map(|message| view! { <div class="form__feedback">{message}</div> })}
            <div class="report-card__actions">
                <Button on_click=move |_| generate(ReportFormat::Pdf)>"Generar PDF"</Button>
                <Button on_click=move |_| generate(ReportFormat::Excel)>"Generar Excel"</Button>
            </div>
        </div>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <PageFrame page_id="reports--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Reportes" />
            <div class="report-grid">
                {ReportKind::ALL.into_iter().map(|kind| view! { <ReportCard kind=kind /> }).collect_view()}
            </div>
        </PageFrame>
    }
}
