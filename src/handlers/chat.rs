//! Chat HTTP handlers.

use std::convert::Infallible;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::sse::{Event, Sse};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::response;
use crate::server::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_user_id() -> String {
    "anonymous".to_string()
}

#[derive(Serialize)]
pub struct ChatResponse {
    response: String,
    status: String,
}

/// One streamed fragment. Field order is part of the wire format.
#[derive(Serialize)]
struct StreamChunk {
    response: String,
    is_complete: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /chat
pub async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    if req.message.trim().is_empty() {
        return response::bad_request("Message cannot be empty").into_response();
    }

    info!(user_id = %req.user_id, "chat request");
    let reply = soft_reply(&state, &req.message).await;

    (
        StatusCode::OK,
        Json(ChatResponse {
            response: reply,
            status: "success".to_string(),
        }),
    )
        .into_response()
}

/// POST /chat/stream
///
/// Emits the reply as SSE events, one whitespace-delimited token per event:
/// `data: {"response":"<token> ","is_complete":<bool>}`.
///
/// The reply is generated in full before the first event goes out; the stream
/// replays an already-complete response and is not incremental generation.
pub async fn chat_stream(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    if req.message.trim().is_empty() {
        return response::bad_request("Message cannot be empty").into_response();
    }

    info!(user_id = %req.user_id, "streaming chat request");
    let reply = soft_reply(&state, &req.message).await;

    let events: Vec<Result<Event, Infallible>> = chunk_reply(&reply)
        .into_iter()
        .map(|chunk| {
            let event = Event::default()
                .json_data(&chunk)
                .unwrap_or_else(|_| Event::default().data("{}"));
            Ok(event)
        })
        .collect();

    Sse::new(tokio_stream::iter(events)).into_response()
}

// ============================================================================
// Helpers
// ============================================================================

/// Resolve a message to reply text, folding failures into the apology reply.
///
/// Chat is fail-soft: a failed model call answers 200 with a human-readable
/// sentence instead of an HTTP error.
async fn soft_reply(state: &AppState, message: &str) -> String {
    match state.responder.generate_response(message).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "model call failed, answering with fallback text");
            e.user_message()
        }
    }
}

/// Split reply text into stream chunks, one per whitespace-delimited token.
/// Only the last chunk carries `is_complete: true`; empty text yields none.
fn chunk_reply(reply: &str) -> Vec<StreamChunk> {
    let words: Vec<&str> = reply.split_whitespace().collect();
    let last = words.len().saturating_sub(1);
    words
        .iter()
        .enumerate()
        .map(|(i, word)| StreamChunk {
            response: format!("{word} "),
            is_complete: i == last,
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_reply_marks_only_last_token() {
        let chunks = chunk_reply("a b c");
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].response, "a ");
        assert!(!chunks[0].is_complete);
        assert_eq!(chunks[1].response, "b ");
        assert!(!chunks[1].is_complete);
        assert_eq!(chunks[2].response, "c ");
        assert!(chunks[2].is_complete);
    }

    #[test]
    fn chunk_reply_single_token() {
        let chunks = chunk_reply("hello");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].response, "hello ");
        assert!(chunks[0].is_complete);
    }

    #[test]
    fn chunk_reply_empty_text_yields_no_chunks() {
        assert!(chunk_reply("").is_empty());
        assert!(chunk_reply("   ").is_empty());
    }

    #[test]
    fn chunk_reply_collapses_whitespace_runs() {
        let fragments: Vec<String> = chunk_reply("one\t two\n  three")
            .into_iter()
            .map(|c| c.response)
            .collect();
        assert_eq!(fragments, ["one ", "two ", "three "]);
    }

    #[test]
    fn stream_chunk_wire_order() {
        let chunk = StreamChunk {
            response: "a ".to_string(),
            is_complete: false,
        };
        assert_eq!(
            serde_json::to_string(&chunk).unwrap(),
            r#"{"response":"a ","is_complete":false}"#
        );
    }

    #[test]
    fn chat_request_user_id_defaults_to_anonymous() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(req.message, "hi");
        assert_eq!(req.user_id, "anonymous");
    }
}
