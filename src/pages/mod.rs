//! Routed pages. Each page talks to the backend only through the shared
//! [`AppClient`](crate::app::AppClient) context.

pub mod home;
pub mod login;
pub mod logout;
