//! Transport decorators for the session concerns.
//!
//! DESIGN
//! ======
//! Each decorator owns one concern and wraps another [`Transport`]. The API
//! client composes them as
//!
//! ```text
//! InvalidateOnUnauthorized( BearerAuth( base transport ) )
//! ```
//!
//! so the token is attached on the way out and a 401 clears the session on
//! the way back, before the caller sees the response.

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;

use super::error::TransportError;
use super::transport::Transport;
use super::types::{AUTHORIZATION, ApiRequest, ApiResponse};
use crate::state::session::SessionStore;
use crate::storage::Storage;

/// Attaches `Authorization: Bearer <token>` when a session token exists.
#[derive(Clone, Debug)]
pub struct BearerAuth<T, S> {
    inner: T,
    session: SessionStore<S>,
}

impl<T, S> BearerAuth<T, S> {
    pub fn new(inner: T, session: SessionStore<S>) -> Self {
        Self { inner, session }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait::async_trait(?Send)]
impl<T: Transport, S: Storage> Transport for BearerAuth<T, S> {
    async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, TransportError> {
        if let Some(token) = self.session.token() {
            request.set_header(AUTHORIZATION, format!("Bearer {token}"));
        }
        self.inner.send(request).await
    }
}

/// Clears the session whenever a response comes back `401`.
#[derive(Clone, Debug)]
pub struct InvalidateOnUnauthorized<T, S> {
    inner: T,
    session: SessionStore<S>,
}

impl<T, S> InvalidateOnUnauthorized<T, S> {
    pub fn new(inner: T, session: SessionStore<S>) -> Self {
        Self { inner, session }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait::async_trait(?Send)]
impl<T: Transport, S: Storage> Transport for InvalidateOnUnauthorized<T, S> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let path = request.path.clone();
        let response = self.inner.send(request).await?;
        if response.status == 401 {
            log::info!("401 from {path}; clearing session");
            if let Err(e) = self.session.clear() {
                log::warn!("failed to clear session after 401: {e}");
            }
        }
        Ok(response)
    }
}
