//! Mock HTTP client for testing.
//!
//! Returns scripted responses per URL and records every request so tests can
//! assert on the exact path, query string and JSON body that was sent.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON. Panics on a missing or invalid body,
    /// which is what a test wants.
    pub fn json_body(&self) -> serde_json::Value {
        let body = self.body.as_deref().unwrap_or("null");
        serde_json::from_str(body).expect("recorded body is not JSON")
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Fail below the HTTP level
    Error(HttpError),
}

impl MockResponse {
    /// A response with the given status and JSON value as body.
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::new(status, value.to_string()))
    }

    /// A response with the given status and raw text body.
    pub fn text(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, body.to_string()))
    }
}

/// Mock HTTP client for testing.
///
/// Lookup order for a URL: queued one-shot responses, then the sticky
/// response for the exact URL, then the longest sticky prefix match, then
/// the default response.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    queued: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a sticky response for a URL (or URL prefix).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Queue a one-shot response for an exact URL. Queued responses are
    /// consumed in order before the sticky response is used.
    pub fn queue_response(&self, url: &str, response: MockResponse) {
        let mut queued = self.queued.lock().unwrap();
        queued
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(queue) = self.queued.lock().unwrap().get_mut(url) {
            if let Some(response) = queue.pop_front() {
                return Some(response);
            }
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        self.default_response.lock().unwrap().clone()
    }

    fn respond(&self, url: &str) -> Result<Response, HttpError> {
        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.respond(url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.respond(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_records_request() {
        let client = MockHttpClient::new();
        client.set_response("http://mock/stories", MockResponse::text(200, "[]"));

        let response = client
            .get("http://mock/stories", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].url, "http://mock/stories");
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_queued_responses_consumed_before_sticky() {
        let client = MockHttpClient::new();
        client.set_response("http://mock/chat", MockResponse::text(200, "sticky"));
        client.queue_response("http://mock/chat", MockResponse::text(200, "first"));

        let first = client.post("http://mock/chat", "{}", &Headers::new()).await.unwrap();
        let second = client.post("http://mock/chat", "{}", &Headers::new()).await.unwrap();
        assert_eq!(first.text(), "first");
        assert_eq!(second.text(), "sticky");
    }

    #[tokio::test]
    async fn test_longest_prefix_wins() {
        let client = MockHttpClient::new();
        client.set_response("http://mock/", MockResponse::text(200, "root"));
        client.set_response("http://mock/stories/", MockResponse::text(200, "detail"));

        let response = client
            .get("http://mock/stories/42?reading_level=simple", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.text(), "detail");
    }

    #[tokio::test]
    async fn test_missing_response_is_error() {
        let client = MockHttpClient::new();
        let result = client.get("http://mock/none", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_error_response() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        let result = client.post("http://mock/chat", "{}", &Headers::new()).await;
        assert_eq!(
            result.unwrap_err(),
            HttpError::ConnectionFailed("refused".to_string())
        );
    }

    #[test]
    fn test_recorded_json_body() {
        let request = RecordedRequest {
            method: "POST".to_string(),
            url: "http://mock/chat".to_string(),
            headers: Headers::new(),
            body: Some(r#"{"message":"hi"}"#.to_string()),
        };
        assert_eq!(request.json_body()["message"], "hi");
    }
}
