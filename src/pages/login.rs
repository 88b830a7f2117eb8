//! Email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use serde_json::Value;

use crate::app::AppClient;
use crate::net::api::login_token;
use crate::router::routes::RouteName;
use crate::state::auth::AuthState;

const MISSING_FIELDS: &str = "Enter both email and password.";
const MISSING_TOKEN: &str = "Sign-in did not return a session token.";

/// Trim the email and require both fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Accept a login response only when it carries its own session token, and
/// pull the signed-in user out of it.
pub fn signed_in_user(data: &Value) -> Result<Option<Value>, &'static str> {
    if login_token(data).is_none() {
        return Err(MISSING_TOKEN);
    }
    Ok(data.get("user").cloned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<AppClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(fields) => fields,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        busy.set(true);
        error.set(None);

        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match client.login(&email_value, &password_value).await {
                Ok(data) => match signed_in_user(&data) {
                    Ok(user) => {
                        auth.set(AuthState::signed_in(user));
                        password.set(String::new());
                        navigate(RouteName::Home.path(), NavigateOptions::default());
                    }
                    Err(message) => error.set(Some(message.to_owned())),
                },
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>"Agenda"</h1>
                <input
                    class="form-control"
                    type="email"
                    placeholder="you@example.com"
                    autocomplete="username"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="form-control"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <Show when=move || error.get().is_some()>
                    <p class="login-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </div>
    }
}
