//! Pre-navigation session check.
//!
//! The check is presence-only: a stored token lets the navigation through
//! without validating or decoding it. An expired token is caught later by the
//! first request that comes back 401.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{ROUTES, RouteDef, RouteName, resolve};
use crate::state::session::SessionStore;
use crate::storage::Storage;

/// Outcome of one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(RouteName),
}

#[derive(Clone, Debug)]
pub struct RouteGuard<S> {
    session: SessionStore<S>,
    routes: &'static [RouteDef],
}

impl<S: Storage> RouteGuard<S> {
    /// Guard the application's [`ROUTES`].
    pub fn new(session: SessionStore<S>) -> Self {
        Self::with_routes(session, ROUTES)
    }

    pub fn with_routes(session: SessionStore<S>, routes: &'static [RouteDef]) -> Self {
        Self { session, routes }
    }

    /// Decide a navigation to `path`.
    #[must_use]
    pub fn before_each(&self, path: &str) -> Navigation {
        let outcome = self.check(&resolve(self.routes, path));
        if let Navigation::Redirect(target) = outcome {
            log::debug!("navigation to {path} needs a session; redirecting to {}", target.path());
        }
        outcome
    }

    /// Decide a navigation given its matched route chain.
    #[must_use]
    pub fn check(&self, matched: &[&RouteDef]) -> Navigation {
        let protected = matched.iter().any(|def| def.requires_auth);
        if protected && !self.session.has_token() {
            Navigation::Redirect(RouteName::Login)
        } else {
            Navigation::Proceed
        }
    }
}
