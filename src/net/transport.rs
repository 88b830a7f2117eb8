//! The async HTTP seam.
//!
//! Futures are not required to be `Send`: the browser fetch API is
//! single-threaded and every call is driven on the local task.

use super::error::TransportError;
use super::types::{ApiRequest, ApiResponse};

/// Sends one request and returns whatever response came back.
///
/// Non-2xx statuses are `Ok`; only failures with no response are `Err`.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Transport for builds without a network backend (native render, docs).
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

#[async_trait::async_trait(?Send)]
impl Transport for OfflineTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        Err(TransportError::Network(format!(
            "network unavailable: {} {}",
            request.method, request.path
        )))
    }
}
