//! Edit → preview → submit pages.

use std::future::Future;

use contracts::shared::form::{
    FieldAction, FormMode, FormModel, ValidatedField, Wizard, WizardCommand, WizardStep,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thaw::*;

use crate::shared::components::PageHeader;
use crate::shared::http::{fetch_json, send, ApiError, ApiRequest};
use crate::shared::navigator::Navigator;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};
use crate::system::auth::AuthContext;

pub struct FormViewModel<F: FormModel + Send + Sync> {
    pub form: RwSignal<F>,
    pub wizard: RwSignal<Wizard>,
    /// Fetching the record being edited.
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
}

impl<F: FormModel + Send + Sync> Clone for FormViewModel<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FormModel + Send + Sync> Copy for FormViewModel<F> {}

impl<F: FormModel + Send + Sync> FormViewModel<F> {
    pub fn new(form: F, mode: FormMode) -> Self {
        Self {
            form: RwSignal::new(form),
            wizard: RwSignal::new(Wizard::new(mode)),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.wizard.with_untracked(Wizard::mode)
    }

    /// Reader and dispatcher for one validated field of the form.
    pub fn field(
        &self,
        get: fn(&F) -> &ValidatedField,
        get_mut: fn(&mut F) -> &mut ValidatedField,
    ) -> (Signal<ValidatedField>, Callback<FieldAction>) {
        let form = self.form;
        (
            Signal::derive(move || form.with(|f| get(f).clone())),
            Callback::new(move |action| form.update(|f| get_mut(f).dispatch(action))),
        )
    }

    pub fn is_ready(&self) -> bool {
        self.form.with(F::is_ready)
    }

    /// Fetch the record to edit and rebuild the form from it.
    pub fn load<R>(&self, auth: AuthContext, path: String, build: impl FnOnce(R) -> F + 'static)
    where
        R: DeserializeOwned + 'static,
    {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match fetch_json::<R>(ApiRequest::get(path)).await {
                Ok(record) => this.form.set(build(record)),
                Err(e) => {
                    if let Some(message) = auth.handle_error(&e) {
                        log::warn!("cannot load form data: {e}");
                        this.load_error.set(Some(message));
                    }
                }
            }
            this.loading.set(false);
        });
    }

    /// "Next": previews a ready form, then submits it through `send`.
    pub fn next<Fut>(&self, auth: AuthContext, send: impl FnOnce(F::Payload) -> Fut + 'static)
    where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let ready = self.form.with_untracked(F::is_ready);
        let command = self
            .wizard
            .try_update(|w| w.next(ready))
            .unwrap_or(WizardCommand::Stay);
        if command != WizardCommand::Submit {
            return;
        }
        let payload = self.form.with_untracked(F::payload);
        let this = *self;
        spawn_local(async move {
            match send(payload).await {
                Ok(()) => this.wizard.update(Wizard::submit_succeeded),
                Err(e) => this.submit_failed(auth, e),
            }
        });
    }

    fn submit_failed(&self, auth: AuthContext, error: ApiError) {
        log::warn!("submit failed: {error}");
        let errors = error.field_errors();
        if !errors.is_empty() {
            self.form.update(|f| f.apply_server_errors(&errors));
        }
        let message = auth
            .handle_error(&error)
            .unwrap_or_else(|| error.user_message());
        self.wizard.update(|w| w.submit_failed_with(message));
    }
}

/// POST to `collection` when creating, PUT to its item when editing.
pub async fn save<P: Serialize>(
    collection: &'static str,
    mode: FormMode,
    payload: P,
) -> Result<(), ApiError> {
    let request = match mode {
        FormMode::Create => ApiRequest::post(collection),
        FormMode::Edit(id) => ApiRequest::put(contracts::shared::endpoints::item(collection, id)),
    };
    send(request.json(&payload)?).await
}

/// Chrome of every wizard page: header, error line, form or preview, the
/// back/next buttons and the success dialog.
#[component]
pub fn WizardFrame(
    #[prop(into)] title: String,
    page_id: &'static str,
    wizard: RwSignal<Wizard>,
    /// Where Cancel and the success dialog lead.
    #[prop(into)]
    back_path: String,
    on_next: Callback<()>,
    #[prop(into)] ready: Signal<bool>,
    #[prop(optional, into)] loading: Signal<bool>,
    /// Failure while fetching the record; replaces the form.
    #[prop(optional, into)]
    load_error: Signal<Option<String>>,
    #[prop(into)] form: ViewFn,
    #[prop(into)] preview: ViewFn,
) -> impl IntoView {
    let navigator = Navigator::new();
    let back_path = StoredValue::new(back_path);
    let is_form = Memo::new(move |_| wizard.with(Wizard::is_form));
    let busy = Memo::new(move |_| wizard.with(Wizard::is_busy));
    let done = RwSignal::new(false);
    Effect::new(move |_| {
        if wizard.with(|w| w.step() == WizardStep::Done) {
            done.set(true);
        }
    });

    let on_back = move |_| {
        let command = wizard.try_update(Wizard::back).unwrap_or(WizardCommand::Stay);
        if command == WizardCommand::Leave {
            back_path.with_value(|path| navigator.go(path));
        }
    };
    let on_accept = move |_| back_path.with_value(|path| navigator.go(path));

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_FORM>
            <PageHeader title=title>
                {move || (!is_form.get()).then(|| view! { <Badge>"Vista previa"</Badge> })}
            </PageHeader>
            <div class="page__content wizard">
                {move || wizard.with(|w| w.error().map(str::to_string)).map(|message| view! {
                    <div class="form__error">{message}</div>
                })}
                {move || {
                    if let Some(message) = load_error.get() {
                        view! { <div class="form__error">{message}</div> }.into_any()
                    } else if loading.get() {
                        view! { <Spinner /> }.into_any()
                    } else if is_form.get() {
                        form.run()
                    } else {
                        preview.run()
                    }
                }}
                <div class="wizard__actions">
                    <Button on_click=on_back disabled=busy>
                        {move || wizard.with(Wizard::back_label)}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_next.run(())
                        disabled=Signal::derive(move || {
                            busy.get() || !ready.get() || load_error.with(Option::is_some)
                        })
                    >
                        {move || wizard.with(Wizard::next_label)}
                    </Button>
                </div>
            </div>
            <Dialog open=done>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Registro exitoso"</DialogTitle>
                        <DialogContent>"Los datos se guardaron correctamente."</DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Primary on_click=on_accept>
                                "Aceptar"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}

/// Current text of a field, for the preview.
pub fn field_value(field: Signal<ValidatedField>) -> Signal<String> {
    Signal::derive(move || field.with(|f| f.value.clone()))
}
