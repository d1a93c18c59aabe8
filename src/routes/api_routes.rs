use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse};
use crate::responder::DEFAULT_SUGGESTIONS;
use crate::service::chat_service::ChatService;

pub const MALFORMED_REPLY: &str =
    "Sorry, I didn't catch that. Could you try sending your message again?";
pub const NO_USER_INPUT_REPLY: &str =
    "I'm ready when you are! Ask me anything to get started.";
pub const INTERNAL_FAILURE_REPLY: &str =
    "Something went sideways on my end. Please try again in a moment.";

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST `/api/chat` — accepts `{ messages: [...] }`, answers the latest user turn
pub async fn chat_handler(
    State(svc): State<ChatService>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(&AppError::malformed(rejection.body_text())),
    };

    match svc.chat(&request) {
        Ok(response) => Json(response).into_response(),
        Err(err) => error_response(&err),
    }
}

/// GET `/api/health` — liveness check
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Maps every failure to a user-facing reply; the UI always gets a `ChatResponse`.
fn error_response(err: &AppError) -> Response {
    let (status, reply) = if err.is_validation() {
        warn!("Rejecting chat request: {err}");
        (StatusCode::BAD_REQUEST, MALFORMED_REPLY)
    } else if err.is_no_user_input() {
        (StatusCode::OK, NO_USER_INPUT_REPLY)
    } else {
        error!("Chat request failed: {err}");
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_FAILURE_REPLY)
    };

    (status, Json(ChatResponse::new(reply, &DEFAULT_SUGGESTIONS))).into_response()
}

/// Handler for `CatchPanicLayer`: a panic while serving a request becomes a 500 reply.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error_response(&AppError::Internal(format!("handler panicked: {detail}")))
}
