//! CivicClient against a local mock backend using wiremock.
//!
//! These tests go through `ReqwestHttpClient`, so they cover the exact
//! paths, query strings, headers and JSON bodies that reach the wire.

mod common;

use civic::api::CivicClient;
use civic::error::{ApiError, ApiErrorKind};
use civic::models::{ChatParams, ExplainPolicyParams, ReadingLevel, TakeActionParams};
use common::{chat_reply, client_for, start_server, story_json};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_fetch_stories_success() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/stories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            story_json("1", "A", "p1"),
            story_json("2", "B", "p2")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let stories = client_for(&server).fetch_stories().await.unwrap();

    assert_eq!(stories.len(), 2);
    assert_eq!(stories[0].id, "1");
    assert_eq!(stories[0].tags, vec!["tax", "budget"]);
    assert_eq!(stories[1].policy_id, "p2");
}

#[tokio::test]
async fn test_story_detail_with_reading_level() {
    let server = start_server().await;
    let mut detail = story_json("42", "Simple Title", "p4");
    detail["detailed_summary"] = json!("Short words.\n\nMore.");
    Mock::given(method("GET"))
        .and(path("/stories/42"))
        .and(query_param("reading_level", "simple"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail))
        .expect(1)
        .mount(&server)
        .await;

    let detail = client_for(&server)
        .fetch_story_detail("42", Some(ReadingLevel::Simple))
        .await
        .unwrap();

    assert_eq!(detail.id(), "42");
    assert_eq!(detail.detailed_summary.as_deref(), Some("Short words.\n\nMore."));
}

#[tokio::test]
async fn test_story_detail_without_level_has_no_query() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/stories/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(story_json("7", "T", "p")))
        .mount(&server)
        .await;

    client_for(&server)
        .fetch_story_detail("7", None)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_explain_policy_defaults() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path("/explain-policy"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "policy_id": "p1",
            "user_role": "general",
            "language": "en"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "policy_title": "Tax Reform",
            "what_is_this": "A change to income tax.",
            "what_it_means_for_you": "Lower withholding.",
            "disclaimer": "Not legal advice."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let explained = client_for(&server)
        .explain_policy(ExplainPolicyParams::new("p1"))
        .await
        .unwrap();

    assert_eq!(explained.policy_title, "Tax Reform");
    assert_eq!(explained.what_it_is, "A change to income tax.");
}

#[tokio::test]
async fn test_take_action_null_location() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path("/take-action"))
        .and(body_json(json!({
            "policy_id": "p1",
            "user_location": null,
            "user_role": "general"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "policy_title": "Tax Reform",
            "actions": ["Call your representative", "Attend a town hall"],
            "disclaimer": "Not legal advice."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .take_action(TakeActionParams::new("p1"))
        .await
        .unwrap();

    assert_eq!(result.actions.len(), 2);
}

#[tokio::test]
async fn test_send_chat_body() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({
            "message": "What is SNAP?",
            "conversation_id": null,
            "metadata": {}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("SNAP is...", Some("c-1"))))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .send_chat(ChatParams::new("What is SNAP?"))
        .await
        .unwrap();

    assert_eq!(reply.answer, "SNAP is...");
    assert_eq!(reply.conversation_id.as_deref(), Some("c-1"));
    assert!(reply.timestamp_utc().is_some());
}

#[tokio::test]
async fn test_fetch_shorts() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/shorts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "s1",
            "title": "Budget in 60s",
            "description": null,
            "video_url": "/media/s1.mp4",
            "thumbnail_url": null
        }])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let shorts = client.fetch_shorts().await.unwrap();

    assert_eq!(shorts.len(), 1);
    assert_eq!(shorts[0].headline(), "CivicCompanion short");
    assert_eq!(
        client.resolve_media_url(&shorts[0].video_url),
        format!("{}/media/s1.mp4", server.uri())
    );
}

#[tokio::test]
async fn test_non_success_status_carries_code_and_body() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/stories"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.fetch_stories().await.unwrap_err();
    let second = client.fetch_stories().await.unwrap_err();

    assert_eq!(first.status(), Some(500));
    assert_eq!(first.to_string(), "API error 500: database down");
    assert_eq!(first.kind(), second.kind());
    assert!(matches!(first, ApiError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/stories"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_stories().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Decode);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 1.
    let client = CivicClient::with_base_url("http://127.0.0.1:1");

    let err = client.fetch_stories().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Transport);
}

#[tokio::test]
async fn test_health_check() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    assert!(client_for(&server).health_check().await.unwrap());
}

#[tokio::test]
async fn test_health_check_unhealthy_status() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    assert!(!client_for(&server).health_check().await.unwrap());
}
