//! reqwest-backed HTTP client
//!
//! Sends the handler's requests to a configured origin. Redirects are not
//! followed, so a 3xx from the login endpoint reaches the handler as-is and
//! is classified like any other non-2xx status. No request timeout is set.

use async_trait::async_trait;
use reqwest::{redirect::Policy, Client, Method, Url};
use tracing::{debug, info, warn};

use lf_core::{HttpClientTrait, HttpRequest, HttpResponse, TransportError};
use lf_shared::config::HttpConfig;

use crate::InfrastructureError;

/// HTTP client talking to the login endpoint's origin
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    base_url: Url,
}

impl ReqwestHttpClient {
    /// Create a new client for the configured origin
    pub fn new(config: &HttpConfig) -> Result<Self, InfrastructureError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| InfrastructureError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(InfrastructureError::InvalidUrl(format!(
                "{}: cannot resolve paths against this URL",
                config.base_url
            )));
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(Policy::none())
            .build()?;

        info!(base_url = %base_url, "HTTP client initialized");

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request path against the base URL
    fn resolve(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::Request(format!("invalid request path '{}': {}", path, e)))
    }
}

#[async_trait]
impl HttpClientTrait for ReqwestHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.resolve(&request.path)?;
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|e| TransportError::Request(format!("invalid method: {}", e)))?;

        debug!(method = %method, url = %url, "Sending request");

        let mut builder = self.client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.body(request.body).send().await.map_err(|e| {
            warn!(error = %e, "Request did not complete");
            TransportError::Request(e.to_string())
        })?;

        let status = response.status().as_u16();
        debug!(status, "Response received");

        Ok(HttpResponse::new(status))
    }
}
