use super::error::{ClientError, Result};
use super::types::UserId;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// API Types - Request
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartDebateRequest {
    pub topic: String,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRequest {
    pub message: String,
    pub user_id: UserId,
}

// ============================================================================
// API Types - Response
// ============================================================================

/// Acknowledgement for a started debate. The client only relies on the status
/// code; both fields are informational.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StartDebateResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    pub response: String,
    #[serde(default)]
    pub status: Option<String>,
}

// ============================================================================
// Debate API
// ============================================================================

/// Backend contract consumed by the client.
///
/// Futures are not `Send`: everything runs on the UI thread.
#[async_trait(?Send)]
pub trait DebateApi {
    async fn fetch_topics(&self) -> Result<Vec<String>>;

    async fn start_debate(&self, request: &StartDebateRequest) -> Result<StartDebateResponse>;

    async fn send_message(&self, request: &MessageRequest) -> Result<MessageResponse>;
}

#[derive(Clone)]
pub struct DebateClient {
    client: Client,
    base_url: Arc<String>,
}

impl DebateClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to build HTTP client: {}", e)))?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: Arc::new(base_url.trim_end_matches('/').to_string()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl DebateApi for DebateClient {
    async fn fetch_topics(&self) -> Result<Vec<String>> {
        let response = self.client.get(self.url("/api/topics")).send().await?;
        let response = ensure_success(response).await?;

        let topics: Vec<String> = response.json().await?;
        tracing::debug!("Fetched {} topics", topics.len());
        Ok(topics)
    }

    async fn start_debate(&self, request: &StartDebateRequest) -> Result<StartDebateResponse> {
        let response = self
            .client
            .post(self.url("/api/debate/start"))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        // Any body (or none) is acceptable here
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    async fn send_message(&self, request: &MessageRequest) -> Result<MessageResponse> {
        let response = self
            .client
            .post(self.url("/api/debate/message"))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let body = response.text().await?;
        parse_message_response(&body)
    }
}

// ============================================================================
// Response helpers
// ============================================================================

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    Err(ClientError::Status {
        status: status.as_u16(),
        message: extract_error_message(&error_text, status.canonical_reason()),
    })
}

/// Pull a human readable message out of an error body.
///
/// Accepts `{"error": "..."}`, `{"error": {"message": "..."}}` and
/// `{"message": "..."}`; anything else falls back to the raw text.
fn extract_error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        let message = value
            .get("error")
            .and_then(|error| error.as_str().or_else(|| error.get("message")?.as_str()))
            .or_else(|| value.get("message").and_then(|m| m.as_str()));
        if let Some(message) = message {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        reason.unwrap_or("Unknown error").to_string()
    } else {
        trimmed.to_string()
    }
}

fn parse_message_response(body: &str) -> Result<MessageResponse> {
    serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
}
