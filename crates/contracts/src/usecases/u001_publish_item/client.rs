//! HTTP client for the catalog backend.
//!
//! The actual I/O sits behind [`HttpTransport`] so the same client runs over
//! `gloo-net` in the browser and over fakes in tests.

use crate::domain::a001_catalog_item::{ShapedRequest, SubmitError};
use crate::shared::config::ApiConfig;
use async_trait::async_trait;
use serde::Deserialize;

/// Shown when a failed response carries no usable `message`
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to save data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP surface the client needs.
///
/// `Err` means no response was received; its text is shown to the operator.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, String>;

    async fn get(&self, url: &str) -> Result<HttpResponse, String>;
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Server-supplied `message` of an error body, or the generic fallback
pub fn application_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

pub struct CatalogClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: HttpTransport> CatalogClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// POST the shaped payload to its category endpoint
    pub async fn create_item(&self, request: &ShapedRequest) -> Result<(), SubmitError> {
        let url = self.config.url(request.endpoint);
        let body = request.to_json()?;
        log::debug!("POST {} ({} bytes)", url, body.len());

        let response = self.transport.post_json(&url, body).await.map_err(|e| {
            log::warn!("POST {} failed: {}", url, e);
            SubmitError::Transport(e)
        })?;

        if !response.is_success() {
            let message = application_error_message(&response.body);
            log::warn!("POST {} -> HTTP {}: {}", url, response.status, message);
            return Err(SubmitError::Application {
                status: response.status,
                message,
            });
        }

        log::debug!("POST {} -> HTTP {}", url, response.status);
        Ok(())
    }

    /// GET the base URL; used only to keep the backend host awake
    pub async fn ping(&self) -> Result<u16, String> {
        self.transport
            .get(self.config.base_url)
            .await
            .map(|r| r.status)
    }
}
