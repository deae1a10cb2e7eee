//! Conversation id handling across several chat sends.

mod common;

use civic::state::ChatState;
use common::{chat_reply, client_for, start_server};
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn send(chat: &mut ChatState, client: &civic::api::CivicClient, text: &str) {
    chat.input.set_content(text);
    let (ticket, params) = chat.prepare_send().expect("send should start");
    let result = client.send_chat(params).await;
    assert!(chat.finish_send(ticket, result));
}

async fn sent_bodies(server: &wiremock::MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}

#[tokio::test]
async fn test_second_message_carries_server_conversation_id() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("Hi!", Some("srv-1"))))
        .mount(&server)
        .await;
    let client = client_for(&server);
    let mut chat = ChatState::new();

    send(&mut chat, &client, "first").await;
    send(&mut chat, &client, "second").await;

    let bodies = sent_bodies(&server).await;
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[1]["conversation_id"], "srv-1");
    assert_eq!(chat.messages().len(), 4);
    assert!(chat.conversation().is_server_assigned());
}

#[tokio::test]
async fn test_fallback_id_reused_without_server_id() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("Hi!", None)))
        .mount(&server)
        .await;
    let client = client_for(&server);
    let mut chat = ChatState::new();

    send(&mut chat, &client, "one").await;
    send(&mut chat, &client, "two").await;
    send(&mut chat, &client, "three").await;

    let bodies = sent_bodies(&server).await;
    let ids: Vec<&str> = bodies
        .iter()
        .map(|b| b["conversation_id"].as_str().unwrap())
        .collect();
    assert!(ids[0].starts_with("local-"));
    assert!(ids.iter().all(|id| *id == ids[0]));
    assert!(!chat.conversation().is_server_assigned());
}

#[tokio::test]
async fn test_failed_send_inserts_error_bubble_and_allows_retry() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("Back!", Some("srv-2"))))
        .mount(&server)
        .await;
    let client = client_for(&server);
    let mut chat = ChatState::new();

    send(&mut chat, &client, "hello").await;
    let error = &chat.messages()[1];
    assert!(error.is_error);
    assert_eq!(error.text, civic::error::CONVERSATION_FAILURE_MESSAGE);

    send(&mut chat, &client, "hello again").await;
    assert_eq!(chat.messages()[3].text, "Back!");
    assert_eq!(chat.conversation().id(), Some("srv-2"));
}
