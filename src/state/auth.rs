#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use super::session::Session;

/// Reactive authentication state shared with components via context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<Value>,
}

impl AuthState {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self { is_authenticated: session.is_authenticated, user: session.user.clone() }
    }

    /// State right after a successful login.
    #[must_use]
    pub fn signed_in(user: Option<Value>) -> Self {
        Self { is_authenticated: true, user }
    }

    /// Best-effort display name for the signed-in user.
    ///
    /// The user record is server-defined; `name` then `email` are tried.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        ["name", "email"]
            .iter()
            .find_map(|field| user.get(*field).and_then(Value::as_str))
            .map(str::to_owned)
    }
}
