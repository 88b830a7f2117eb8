//! Month view: the signed-in user's events for one calendar month.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use serde_json::Value;

use crate::app::{AppClient, AppStorage};
use crate::router::routes::RouteName;
use crate::state::auth::AuthState;
use crate::util::period::Period;
use crate::util::persisted::PersistedCell;

/// Storage key for the last month the user looked at.
pub const PERIOD_KEY: &str = "agenda_period";

/// Display fields pulled from a server event record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventSummary {
    pub title: String,
    pub starts_at: Option<String>,
}

/// Extract event summaries from an `/events` payload.
///
/// Accepts a bare array or a `{ "data": [...] }` envelope; anything else is
/// treated as no events.
pub fn event_summaries(payload: &Value) -> Vec<EventSummary> {
    let items = payload
        .as_array()
        .or_else(|| payload.get("data").and_then(Value::as_array));
    let Some(items) = items else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| EventSummary {
            title: first_str(item, &["title", "name"]).unwrap_or("(untitled)").to_owned(),
            starts_at: first_str(item, &["start", "starts_at", "date"]).map(str::to_owned),
        })
        .collect()
}

fn first_str<'a>(item: &'a Value, fields: &[&str]) -> Option<&'a str> {
    fields.iter().find_map(|field| item.get(*field).and_then(Value::as_str))
}

/// Move the persisted period one step; subscribers see the new value.
pub fn step_period(cell: &mut PersistedCell<Period>, f: fn(Period) -> Period) {
    let next = f(*cell.get());
    cell.set(next);
}

#[component]
pub fn HomePage() -> impl IntoView {
    let client = expect_context::<AppClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let storage = expect_context::<AppStorage>();
    let navigate = use_navigate();

    // The cell owns the period; the signal only mirrors it for the view.
    let mut cell = PersistedCell::create(storage, PERIOD_KEY, Period::current());
    let period = RwSignal::new(*cell.get());
    cell.subscribe(move |p: &Period| period.set(*p));
    let saved = StoredValue::new(cell);
    let step = move |f: fn(Period) -> Period| saved.update_value(|cell| step_period(cell, f));

    // Refresh the profile; a rejected token sends the user back to login.
    let profile_client = client.clone();
    let profile = LocalResource::new(move || {
        let client = profile_client.clone();
        async move { client.user().await }
    });
    Effect::new(move || match profile.get() {
        Some(Ok(user)) => auth.update(|state| state.user = Some(user)),
        Some(Err(e)) if e.is_unauthorized() => {
            auth.set(AuthState::default());
            navigate(RouteName::Login.path(), NavigateOptions::default());
        }
        Some(Err(e)) => log::warn!("profile fetch failed: {e}"),
        None => {}
    });

    let events = LocalResource::new(move || {
        let client = client.clone();
        let Period { year, month } = period.get();
        async move { client.events(month, year).await }
    });

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <span class="home-page__user">{move || auth.get().display_name().unwrap_or_default()}</span>
                <a class="btn btn-link" href=RouteName::Logout.path()>"Sign out"</a>
            </header>

            <nav class="home-page__period">
                <button class="btn" on:click=move |_| step(Period::prev)>"<"</button>
                <h2>{move || period.get().label()}</h2>
                <button class="btn" on:click=move |_| step(Period::next)>">"</button>
            </nav>

            <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                {move || {
                    events
                        .get()
                        .map(|result| match result {
                            Ok(payload) => render_events(event_summaries(&payload)),
                            Err(e) => view! { <p class="home-page__error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

fn render_events(events: Vec<EventSummary>) -> AnyView {
    if events.is_empty() {
        return view! { <p class="home-page__empty">"No events this month."</p> }.into_any();
    }
    view! {
        <ul class="home-page__events">
            {events
                .into_iter()
                .map(|event| {
                    view! {
                        <li class="event">
                            <span class="event__title">{event.title}</span>
                            {event.starts_at.map(|at| view! { <span class="event__time">{at}</span> })}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
