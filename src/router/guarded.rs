//! Router integration for [`RouteGuard`](super::guard::RouteGuard).

use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::guard::Navigation;
use super::routes::RouteName;
use crate::app::AppGuard;

/// Renders `children` only if the guard lets a navigation to `route` through.
///
/// Evaluated each time the route renders, so a session cleared by a 401
/// sends the next visit to the login page.
#[component]
pub fn Guarded(route: RouteName, children: ChildrenFn) -> impl IntoView {
    let guard = expect_context::<AppGuard>();
    match guard.before_each(route.path()) {
        Navigation::Proceed => children().into_any(),
        Navigation::Redirect(target) => view! { <Redirect path=target.path()/> }.into_any(),
    }
}
