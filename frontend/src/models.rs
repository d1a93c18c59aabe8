use serde::{Deserialize, Serialize};

/// Shown whenever the backend sends no suggestions of its own.
pub const DEFAULT_SUGGESTIONS: [&str; 3] =
    ["Help me plan my week", "Brainstorm some ideas", "Explain a concept to me"];

/// Matches the backend `Message` model.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: "assistant".to_string(), content: content.into() }
    }
}

/// Request body for `POST /api/chat`: the whole local history, oldest first.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub messages: &'a [Message],
}

/// Response from the chat API. Error statuses carry the same shape.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

pub fn default_suggestions() -> Vec<String> {
    DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

/// The pills to display after a reply.
pub fn suggestions_or_default(suggestions: Vec<String>) -> Vec<String> {
    if suggestions.is_empty() {
        default_suggestions()
    } else {
        suggestions
    }
}
