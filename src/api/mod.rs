//! Typed client for the CivicCompanion backend.
//!
//! One async method per endpoint. Each performs a single request through the
//! injected [`HttpClient`], maps any non-2xx status to
//! [`ApiError::Status`] and decodes the JSON body into the declared type.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapters::ReqwestHttpClient;
use crate::error::{ApiError, CivicResult};
use crate::models::{
    ChatParams, ChatRequest, ChatResponse, ExplainPolicyParams, ExplainPolicyRequest,
    ExplainPolicyResponse, ReadingLevel, ShortVideo, Story, StoryDetail, TakeActionParams,
    TakeActionRequest, TakeActionResponse,
};
use crate::traits::{Headers, HttpClient, Response};

pub const DEFAULT_BASE_URL: &str =
    "https://civiccompanion-backend-eqfgdybbdsawbzcx.canadacentral-01.azurewebsites.net";

/// Client for the CivicCompanion HTTP API.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Clone)]
pub struct CivicClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for CivicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CivicClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl CivicClient {
    /// Client for the default backend over reqwest.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for a custom backend over reqwest.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Client with an injected transport (used by tests).
    pub fn with_http_client(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /stories`
    pub async fn fetch_stories(&self) -> CivicResult<Vec<Story>> {
        self.get_json("/stories").await
    }

    /// `GET /stories/{id}`, with `?reading_level=` only when a level is given.
    pub async fn fetch_story_detail(
        &self,
        story_id: &str,
        reading_level: Option<ReadingLevel>,
    ) -> CivicResult<StoryDetail> {
        let mut path = format!("/stories/{}", urlencoding::encode(story_id));
        if let Some(level) = reading_level {
            path.push_str("?reading_level=");
            path.push_str(&urlencoding::encode(level.as_str()));
        }
        self.get_json(&path).await
    }

    /// `POST /explain-policy`
    pub async fn explain_policy(
        &self,
        params: ExplainPolicyParams,
    ) -> CivicResult<ExplainPolicyResponse> {
        self.post_json("/explain-policy", &ExplainPolicyRequest::from(params))
            .await
    }

    /// `POST /take-action`
    pub async fn take_action(&self, params: TakeActionParams) -> CivicResult<TakeActionResponse> {
        self.post_json("/take-action", &TakeActionRequest::from(params))
            .await
    }

    /// `POST /chat`
    pub async fn send_chat(&self, params: ChatParams) -> CivicResult<ChatResponse> {
        self.post_json("/chat", &ChatRequest::from(params)).await
    }

    /// `GET /shorts`
    pub async fn fetch_shorts(&self) -> CivicResult<Vec<ShortVideo>> {
        self.get_json("/shorts").await
    }

    /// `GET /health`. Returns `Ok(true)` on any 2xx.
    pub async fn health_check(&self) -> CivicResult<bool> {
        let url = self.url("/health");
        let response = self.http.get(&url, &Headers::new()).await?;
        tracing::debug!(method = "GET", path = "/health", status = response.status);
        Ok(response.is_success())
    }

    /// Absolute URL for a media path returned by the backend.
    ///
    /// Absolute `http(s)` URLs pass through unchanged.
    pub fn resolve_media_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> CivicResult<T> {
        let response = self.http.get(&self.url(path), &Headers::new()).await?;
        tracing::debug!(method = "GET", path, status = response.status);
        decode(response)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> CivicResult<T> {
        let body = serde_json::to_string(body).map_err(ApiError::Encode)?;
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let response = self.http.post(&self.url(path), &body, &headers).await?;
        tracing::debug!(method = "POST", path, status = response.status);
        decode(response)
    }
}

impl Default for CivicClient {
    fn default() -> Self {
        Self::new()
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> CivicResult<T> {
    if !response.is_success() {
        return Err(ApiError::Status {
            status: response.status,
            body: response.text(),
        });
    }
    response.json().map_err(ApiError::Decode)
}
