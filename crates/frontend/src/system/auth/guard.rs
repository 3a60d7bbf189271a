use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` only for users holding `permission`.
#[component]
pub fn RequirePermission(
    #[prop(into)] permission: String,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.has_permission(&permission)
            fallback=|| view! { <div class="access-denied">"No tiene permisos para ver esta sección."</div> }
        >
            {children()}
        </Show>
    }
}
