// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Streamed turn delivery tests: chunk ordering, the single-chunk fallback,
//! terminal chunk guarantees, and consumer abandonment.

use std::sync::Arc;
use std::time::Duration;

use frontdesk_agent::ConversationService;
use frontdesk_config::{AgentConfig, StreamingMode};
use frontdesk_core::{ActionCategory, StreamChunk};
use frontdesk_storage::{queries, Database};
use frontdesk_test_utils::{temp_db, ScriptedGateway};
use frontdesk_tools::ToolRegistry;
use futures::StreamExt;

async fn service(
    gateway: Arc<ScriptedGateway>,
    streaming: StreamingMode,
) -> (ConversationService, Database, tempfile::TempDir) {
    let (db, dir) = temp_db().await;
    let settings = AgentConfig {
        streaming,
        ..AgentConfig::default()
    };
    let service = ConversationService::new(
        db.clone(),
        gateway,
        Arc::new(ToolRegistry::new(Duration::from_secs(2))),
        settings,
    );
    (service, db, dir)
}

async fn collect(service: &ConversationService, user: &str, text: &str) -> Vec<StreamChunk> {
    service
        .process_turn_streaming(user, text)
        .collect::<Vec<_>>()
        .await
}

#[tokio::test]
async fn live_tokens_stream_in_order_then_done() {
    let gateway = Arc::new(ScriptedGateway::streaming());
    gateway.push_final("Hello there friend");
    let (service, _db, _dir) = service(gateway, StreamingMode::LiveTokens).await;

    let chunks = collect(&service, "+15550001111", "hi").await;
    assert!(chunks.len() > 2, "expected multiple content chunks");

    let (content, terminal) = chunks.split_at(chunks.len() - 1);
    let mut assembled = String::new();
    for chunk in content {
        match chunk {
            StreamChunk::Content(token) => assembled.push_str(token),
            other => panic!("unexpected non-content chunk before terminal: {other:?}"),
        }
    }
    assert_eq!(assembled, "Hello there friend");
    match &terminal[0] {
        StreamChunk::Done {
            action,
            full_response,
        } => {
            assert_eq!(*action, ActionCategory::Response);
            assert_eq!(full_response, "Hello there friend");
        }
        other => panic!("expected Done, got {other:?}"),
    }
}

#[tokio::test]
async fn non_streaming_gateway_falls_back_to_single_chunk() {
    let gateway = Arc::new(ScriptedGateway::new());
    gateway.push_final("One shot reply.");
    let (service, _db, _dir) = service(gateway, StreamingMode::LiveTokens).await;

    let chunks = collect(&service, "+15550001111", "hi").await;
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0], StreamChunk::Content("One shot reply.".to_string()));
    assert!(matches!(chunks[1], StreamChunk::Done { .. }));
}

#[tokio::test]
async fn rechunk_mode_reassembles_exactly() {
    let gateway = Arc::new(ScriptedGateway::new());
    gateway.push_final("Hi there, I can help with that.");
    let (service, _db, _dir) = service(gateway, StreamingMode::Rechunk).await;

    let chunks = collect(&service, "+15550001111", "hi").await;
    let mut assembled = String::new();
    let mut done_seen = 0;
    for chunk in &chunks {
        match chunk {
            StreamChunk::Content(fragment) => assembled.push_str(fragment),
            StreamChunk::Done { full_response, .. } => {
                done_seen += 1;
                assert_eq!(full_response, "Hi there, I can help with that.");
            }
            StreamChunk::Error(e) => panic!("unexpected error chunk: {e}"),
        }
    }
    assert_eq!(assembled, "Hi there, I can help with that.");
    assert_eq!(done_seen, 1);
    assert!(matches!(chunks.last(), Some(StreamChunk::Done { .. })));
}

#[tokio::test]
async fn gateway_failure_yields_single_error_chunk_and_persists_apology() {
    let gateway = Arc::new(ScriptedGateway::streaming());
    gateway.push_error("engine unavailable");
    let (service, db, _dir) = service(gateway, StreamingMode::LiveTokens).await;

    let chunks = collect(&service, "+15550001111", "hi").await;
    assert_eq!(chunks.len(), 1);
    match &chunks[0] {
        StreamChunk::Error(message) => {
            assert!(message.starts_with("I encountered an error:"));
            assert!(message.contains("engine unavailable"));
            assert!(message.ends_with("Please try again."));
        }
        other => panic!("expected Error, got {other:?}"),
    }

    let convo = queries::conversations::get_conversation_by_user(&db, "+15550001111")
        .await
        .unwrap()
        .unwrap();
    let messages = queries::messages::messages_for_conversation(&db, &convo.id)
        .await
        .unwrap();
    let last = messages.last().unwrap();
    assert_eq!(last.role, "assistant");
    assert!(last.content.starts_with("I encountered an error:"));
}

#[tokio::test]
async fn abandoned_consumer_does_not_lose_the_turn() {
    let gateway = Arc::new(ScriptedGateway::streaming());
    gateway.push_final("A longer reply with several tokens to stream out");
    let (service, db, _dir) = service(gateway, StreamingMode::LiveTokens).await;

    let mut stream = service.process_turn_streaming("+15550001111", "hi");
    let first = stream.next().await;
    assert!(matches!(first, Some(StreamChunk::Content(_))));
    drop(stream);

    // the worker finishes on its own; poll for the persisted reply
    let mut persisted = false;
    for _ in 0..50 {
        if let Some(convo) =
            queries::conversations::get_conversation_by_user(&db, "+15550001111")
                .await
                .unwrap()
        {
            let messages = queries::messages::messages_for_conversation(&db, &convo.id)
                .await
                .unwrap();
            if messages.iter().any(|m| m.role == "assistant") {
                persisted = true;
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(persisted, "assistant reply was not persisted after abandonment");
}
