//! Browser side of the backend API.
//!
//! `BrowserTransport` implements the contracts `HttpTransport` over
//! `gloo-net` (window `fetch`).

use async_trait::async_trait;
use contracts::shared::config::API_CONFIG;
use contracts::usecases::u001_publish_item::{CatalogClient, HttpResponse, HttpTransport};
use gloo_net::http::{Request, Response};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

async fn read_response(response: Response) -> HttpResponse {
    let status = response.status();
    // A body that cannot be read is treated as empty; callers only inspect it on errors.
    let body = response.text().await.unwrap_or_default();
    HttpResponse { status, body }
}

#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, String> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| format!("Failed to build request: {}", e))?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        Ok(read_response(response).await)
    }

    async fn get(&self, url: &str) -> Result<HttpResponse, String> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        Ok(read_response(response).await)
    }
}

/// Client bound to the build-time backend URL
pub fn catalog_client() -> CatalogClient<BrowserTransport> {
    CatalogClient::new(API_CONFIG, BrowserTransport)
}
