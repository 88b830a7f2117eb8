//! Client-side state.
//!
//! DESIGN
//! ======
//! `session` is the durable source of truth for credentials and is the only
//! code that touches the `api_token`/`auth` keys. `auth` is the reactive view
//! of that session handed to components.

pub mod auth;
pub mod session;
