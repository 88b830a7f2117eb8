//! Signs out on mount, then returns to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppClient;
use crate::router::routes::RouteName;
use crate::state::auth::AuthState;

#[component]
pub fn LogoutPage() -> impl IntoView {
    let client = expect_context::<AppClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            // Local session is gone either way; the remote result is only logged.
            if let Err(e) = client.logout().await {
                log::warn!("logout: {e}");
            }
            auth.set(AuthState::default());
            navigate(RouteName::Login.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        });
    });

    view! { <p class="logout-page">"Signing out..."</p> }
}
