//! Networking: wire types, transports, middleware and the API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` defines the single async seam every HTTP backend implements.
//! `middleware` wraps a transport with the cross-cutting auth concerns in a
//! fixed order, and `api` exposes the backend's operations on top of that
//! stack. `error` normalizes every failure into [`error::ApiError`].

pub mod api;
pub mod error;
#[cfg(feature = "csr")]
pub mod gloo;
pub mod middleware;
#[cfg(feature = "native")]
pub mod native;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
