//! Native transport over `reqwest`, used by the terminal client.

#[cfg(test)]
#[path = "native_test.rs"]
mod native_test;

use super::error::TransportError;
use super::transport::Transport;
use super::types::{ApiRequest, ApiResponse, Method, join_url, parse_body};
use crate::config::ApiConfig;

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
}

impl ReqwestTransport {
    /// Build a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), timeout_ms: config.timeout_ms() })
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = join_url(&self.base_url, &request.path);
        let mut builder = self
            .http
            .request(http_method(request.method), url)
            .header(reqwest::header::ACCEPT, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(self.timeout_ms)
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| TransportError::Decode(e.to_string()))?;
        Ok(ApiResponse::new(status, parse_body(&text)))
    }
}
