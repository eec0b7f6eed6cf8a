//! HTTP client module.
//!
//! One method per backend endpoint, grouped by resource. Every method issues
//! a single request, maps non-2xx statuses onto the error taxonomy, and
//! deserializes the response envelope; there is no retry or de-duplication,
//! the last response wins.

mod admin;
mod faculty;
mod hods;
mod requests;

pub use faculty::*;
pub use hods::*;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::errors::AppError;

/// Client for the attendance tracker backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against the configured backend.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Check the response status and deserialize the body.
///
/// Backend error bodies carry a `message` field; it becomes the error message
/// when present, otherwise the HTTP status text stands in.
pub(crate) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, AppError> {
    let status = resp.status();
    let body = resp.text().await?;

    if status.is_success() {
        return serde_json::from_str(&body).map_err(AppError::from);
    }

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

    tracing::warn!(status = status.as_u16(), "Backend error: {}", message);

    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized(message),
        StatusCode::NOT_FOUND => AppError::NotFound(message),
        StatusCode::BAD_REQUEST => AppError::Validation(message),
        s => AppError::Api {
            status: s.as_u16(),
            message,
        },
    })
}
