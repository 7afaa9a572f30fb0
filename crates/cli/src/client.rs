use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use panda_common::{
    Alert, AlertFilter, AlertPatch, AlertStatus, ErrorResponse, HealthResponse, ItemResponse,
    ListResponse, NewAlert,
};

use crate::cmd::helpers;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(e) => e.status(),
            Self::Api { status, .. } => Some(*status),
        }
    }
}

/// Typed wrapper over the `/alerts` REST API.
#[derive(Clone)]
pub struct AlertClient {
    http: reqwest::Client,
    base: String,
}

impl AlertClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: helpers::normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub async fn list(&self, filter: &AlertFilter) -> Result<ListResponse<Alert>, ClientError> {
        let mut query = Vec::new();
        if let Some(country) = filter.country() {
            query.push(("country", country));
        }
        if let Some(status) = filter.status() {
            query.push(("status", status));
        }

        let resp = self.http.get(self.url("/alerts")).query(&query).send().await?;
        parse(resp, "Failed to fetch alerts", false).await
    }

    pub async fn get(&self, id: &str) -> Result<ItemResponse<Alert>, ClientError> {
        let resp = self.http.get(self.url(&format!("/alerts/{id}"))).send().await?;
        parse(resp, "Failed to fetch alert", false).await
    }

    pub async fn create(&self, alert: &NewAlert) -> Result<ItemResponse<Alert>, ClientError> {
        let resp = self.http.post(self.url("/alerts")).json(alert).send().await?;
        parse(resp, "Failed to create alert", true).await
    }

    pub async fn update(&self, id: &str, patch: &AlertPatch) -> Result<ItemResponse<Alert>, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("/alerts/{id}")))
            .json(patch)
            .send()
            .await?;
        parse(resp, "Failed to update alert", true).await
    }

    pub async fn update_status(
        &self,
        id: &str,
        status: AlertStatus,
    ) -> Result<ItemResponse<Alert>, ClientError> {
        self.update(id, &AlertPatch::status(status)).await
    }

    pub async fn delete(&self, id: &str) -> Result<ItemResponse<Alert>, ClientError> {
        let resp = self.http.delete(self.url(&format!("/alerts/{id}"))).send().await?;
        parse(resp, "Failed to delete alert", false).await
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let resp = self.http.get(self.url("/health")).send().await?;
        parse(resp, "Health check failed", false).await
    }
}

async fn parse<T: DeserializeOwned>(
    resp: Response,
    fallback: &str,
    use_details: bool,
) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json().await?);
    }

    let body: Option<ErrorResponse> = resp.json().await.ok();
    Err(ClientError::Api {
        status,
        message: error_message(body.as_ref(), fallback, use_details),
    })
}

/// Picks the message shown to the user: joined validation details (for
/// writes), then the server's `error`, then `fallback`.
pub fn error_message(body: Option<&ErrorResponse>, fallback: &str, use_details: bool) -> String {
    let Some(body) = body else {
        return fallback.to_string();
    };

    if use_details {
        if let Some(details) = body.details.as_ref().filter(|d| !d.is_empty()) {
            return details.join(", ");
        }
    }
    if !body.error.is_empty() {
        return body.error.clone();
    }
    fallback.to_string()
}
