//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::pages::{home::HomePage, login::LoginPage, logout::LogoutPage};
use crate::router::{guard::RouteGuard, guarded::Guarded, routes::RouteName};
use crate::state::{auth::AuthState, session::SessionStore};

#[cfg(feature = "csr")]
pub type AppStorage = crate::storage::LocalStorage;
#[cfg(not(feature = "csr"))]
pub type AppStorage = crate::storage::MemoryStorage;

#[cfg(feature = "csr")]
pub type AppTransport = crate::net::gloo::GlooTransport;
#[cfg(not(feature = "csr"))]
pub type AppTransport = crate::net::transport::OfflineTransport;

pub type AppClient = ApiClient<AppTransport, AppStorage>;
pub type AppGuard = RouteGuard<AppStorage>;

#[cfg(feature = "csr")]
fn app_transport(config: &ApiConfig) -> AppTransport {
    crate::net::gloo::GlooTransport::new(config)
}

#[cfg(not(feature = "csr"))]
fn app_transport(_config: &ApiConfig) -> AppTransport {
    crate::net::transport::OfflineTransport
}

/// Root application component.
///
/// Builds the session context once and shares it: the API client and the
/// route guard hold handles to the same [`SessionStore`], and `AuthState`
/// is seeded from it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("ignoring build-time API config: {e}");
        ApiConfig::default()
    });
    let storage = AppStorage::default();
    let session = SessionStore::new(storage.clone());
    let client: AppClient = ApiClient::new(app_transport(&config), session.clone());
    let guard: AppGuard = RouteGuard::new(session.clone());
    let auth = RwSignal::new(AuthState::from_session(&session.load()));

    provide_context(storage);
    provide_context(client);
    provide_context(guard);
    provide_context(auth);

    view! {
        <Title text="Agenda"/>

        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Guarded route=RouteName::Home><HomePage/></Guarded> }
                    />
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("logout") view=LogoutPage/>
                </Routes>
            </main>
        </Router>
    }
}
