//! Common test utilities for integration tests.
//!
//! Every test gets its own [`MockServer`] and a [`CivicClient`] pointed at
//! it through the real reqwest adapter.

#![allow(dead_code)]

use civic::api::CivicClient;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Start a fresh mock backend.
pub async fn start_server() -> MockServer {
    MockServer::start().await
}

/// Client for `server` using the production HTTP stack.
pub fn client_for(server: &MockServer) -> CivicClient {
    CivicClient::with_base_url(server.uri())
}

pub fn story_json(id: &str, title: &str, policy_id: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "summary": format!("{} summary", title),
        "policy_id": policy_id,
        "tags": ["tax", "budget"],
        "image_url": null
    })
}

pub fn chat_reply(answer: &str, conversation_id: Option<&str>) -> Value {
    json!({
        "intent": "general",
        "answer": answer,
        "sources": [],
        "tools_used": [],
        "conversation_id": conversation_id,
        "timestamp": "2025-01-01T12:00:00"
    })
}
