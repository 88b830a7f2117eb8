//! Browser transport over `fetch` via `gloo-net`.

use std::time::Duration;

use futures::future::{Either, select};
use gloo_net::http::{Method as HttpMethod, RequestBuilder};
use gloo_timers::future::TimeoutFuture;

use super::error::TransportError;
use super::transport::Transport;
use super::types::{ApiRequest, ApiResponse, Method, join_url, parse_body};
use crate::config::ApiConfig;

#[derive(Clone, Debug)]
pub struct GlooTransport {
    base_url: String,
    timeout: Duration,
}

impl GlooTransport {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self { base_url: config.base_url.clone(), timeout: config.timeout }
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

fn http_method(method: Method) -> HttpMethod {
    match method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Put => HttpMethod::PUT,
        Method::Patch => HttpMethod::PATCH,
        Method::Delete => HttpMethod::DELETE,
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = join_url(&self.base_url, &request.path);
        let mut builder = RequestBuilder::new(&url)
            .method(http_method(request.method))
            .query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Request(e.to_string()))?;

        let timeout_ms = self.timeout_ms();
        let timer = TimeoutFuture::new(u32::try_from(timeout_ms).unwrap_or(u32::MAX));
        // The timer covers the body read as well as the headers.
        let exchange = async {
            let response = prepared.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
            let status = response.status();
            let text = response.text().await.map_err(|e| TransportError::Decode(e.to_string()))?;
            Ok::<_, TransportError>(ApiResponse::new(status, parse_body(&text)))
        };
        match select(Box::pin(exchange), timer).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(TransportError::Timeout(timeout_ms)),
        }
    }
}
