//! Agenda backend client.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ApiClient`] is the single point of outbound HTTP. It owns the
//! middleware stack, unwraps successful responses to their JSON body, and
//! turns everything else into an [`ApiError`]. Login and logout are the only
//! operations that write the session directly; a 401 on any call clears it
//! through [`InvalidateOnUnauthorized`].
//!
//! ENDPOINTS
//! =========
//! - `POST /login` `{email, password}` -> `{api_token, user}`
//! - `POST /logout`
//! - `GET /user`
//! - `GET /events?month=<year>-<month>`

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt::Display;

use serde_json::{Value, json};

use super::error::ApiError;
use super::middleware::{BearerAuth, InvalidateOnUnauthorized};
use super::transport::Transport;
use super::types::{ApiRequest, Method};
use crate::state::session::SessionStore;
use crate::storage::Storage;

type Stack<T, S> = InvalidateOnUnauthorized<BearerAuth<T, S>, S>;

#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    transport: Stack<T, S>,
    session: SessionStore<S>,
}

impl<T, S> ApiClient<T, S>
where
    T: Transport,
    S: Storage + Clone,
{
    /// Wrap `transport` with the session middleware.
    pub fn new(transport: T, session: SessionStore<S>) -> Self {
        let authed = BearerAuth::new(transport, session.clone());
        let transport = InvalidateOnUnauthorized::new(authed, session.clone());
        Self { transport, session }
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Exchange credentials for a token and persist the session.
    ///
    /// The session is written only when the body carries a non-empty
    /// `api_token`. The full response body is returned either way.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Auth`] when credentials are rejected, other
    /// variants for server or transport failures, and
    /// [`ApiError::Storage`] if the session cannot be written.
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        let request = ApiRequest::post("/login").with_json(json!({ "email": email, "password": password }));
        let data = self.dispatch(request).await?;
        if let Some(token) = login_token(&data) {
            let user = data.get("user").cloned().unwrap_or(Value::Null);
            self.session.establish(token, user)?;
            log::info!("session established");
        }
        Ok(data)
    }

    /// End the session on the server and locally.
    ///
    /// Local session keys are cleared after the remote call whether or not
    /// it succeeded; the remote outcome is still returned.
    ///
    /// # Errors
    ///
    /// Returns the remote call's error, or [`ApiError::Storage`] if the
    /// remote call succeeded but the local clear failed.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let remote = self.dispatch(ApiRequest::post("/logout")).await;
        let local = self.session.clear();
        if let Err(e) = &remote {
            log::warn!("remote logout failed: {e}");
            if let Err(local_err) = &local {
                log::warn!("local session clear failed: {local_err}");
            }
        }
        remote?;
        local?;
        Ok(())
    }

    /// Fetch the authenticated user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Auth`] or [`ApiError::NotFound`] per server response.
    pub async fn user(&self) -> Result<Value, ApiError> {
        self.dispatch(ApiRequest::get("/user")).await
    }

    /// Fetch the events of one month.
    ///
    /// Month and year are joined as `<year>-<month>` without padding.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn events(&self, month: impl Display, year: impl Display) -> Result<Value, ApiError> {
        let request = ApiRequest::get("/events").with_query("month", month_param(month, year));
        self.dispatch(request).await
    }

    /// Send an arbitrary authorized request. `None` data sends no body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn request(&self, method: Method, url: &str, data: Option<Value>) -> Result<Value, ApiError> {
        let mut request = ApiRequest::new(method, url);
        request.body = data;
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{method} {path} failed: {e}");
            ApiError::from(e)
        })?;
        if response.is_success() {
            return Ok(response.body);
        }
        log::debug!("{method} {path} -> {}", response.status);
        Err(ApiError::from_response(response.status, &response.body))
    }
}

/// `month` query value for the events endpoint.
pub fn month_param(month: impl Display, year: impl Display) -> String {
    format!("{year}-{month}")
}

/// Token in a login response, if it carries a usable one.
#[must_use]
pub fn login_token(data: &Value) -> Option<&str> {
    data.get("api_token").and_then(Value::as_str).filter(|t| !t.is_empty())
}
