use gloo_net::http::Request;

use crate::models::{ChatRequest, ChatResponse, Message};

/// Base URL of the backend API server.
const API_BASE: &str = "http://localhost:8080";

/// Sends the full conversation and returns the assistant's reply.
///
/// Non-2xx statuses still carry a displayable `ChatResponse`, so the body is
/// parsed regardless and only logged as a warning.
pub async fn send_chat(history: &[Message]) -> Result<ChatResponse, String> {
    let body = ChatRequest { messages: history };

    let resp = Request::post(&format!("{API_BASE}/api/chat"))
        .json(&body)
        .map_err(|e| format!("Serialize error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        log::warn!("Chat request returned status {}", resp.status());
    }

    resp.json::<ChatResponse>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}
