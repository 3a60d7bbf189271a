use contracts::shared::form::{FieldAction, FormModel};
use contracts::system::auth::{LoginForm, LOGIN_FAILED};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::paths;
use crate::shared::components::ValidatedInput;
use crate::shared::http::ApiError;
use crate::shared::navigator::Navigator;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::{api, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigator = Navigator::new();
    let form = RwSignal::new(LoginForm::default());
    let is_loading = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        if auth.is_logged_in() {
            navigator.redirect(paths::SELECT_AGENCY);
        }
    });

    let email = Signal::derive(move || form.with(|f| f.email.clone()));
    let password = Signal::derive(move || form.with(|f| f.password.clone()));
    let on_email = Callback::new(move |action: FieldAction| form.update(|f| f.email.dispatch(action)));
    let on_password =
        Callback::new(move |action: FieldAction| form.update(|f| f.password.dispatch(action)));

    let submit = move || {
        if !form.with(LoginForm::is_ready) {
            form.update(LoginForm::touch_all);
            return;
        }
        let request = form.with(LoginForm::payload);
        is_loading.set(true);
        message.set(None);
        spawn_local(async move {
            match api::login(request.email, request.password).await {
                Ok(session) => {
                    auth.login(session);
                    navigator.go(paths::SELECT_AGENCY);
                }
                Err(ApiError::Http { status, .. }) => {
                    log::info!("login rejected with {status}");
                    message.set(Some(LOGIN_FAILED.to_string()));
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    message.set(Some(e.user_message()));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h1>"Inicio de Sesión"</h1>
                    {move || message.get().map(|text| view! {
                        <div class="error-message" on:click=move |_| message.set(None)>{text}</div>
                    })}
                    <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }>
                        <ValidatedInput
                            label="Correo electrónico"
                            field=email
                            on_action=on_email
                            input_type="email"
                            placeholder="Ingrese su correo electrónico"
                            disabled=is_loading
                        />
                        <ValidatedInput
                            label="Contraseña"
                            field=password
                            on_action=on_password
                            input_type="password"
                            placeholder="Ingrese su contraseña"
                            disabled=is_loading
                        />
                        <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                            {move || if is_loading.get() { "Autenticando..." } else { "Ingresar" }}
                        </button>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}
