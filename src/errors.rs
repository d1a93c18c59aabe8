use thiserror::Error;

/// Top-level application error.
/// All variants carry a human-readable message for display/logging.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Request errors ───────────────────────────────────────────────────────
    #[error("Malformed chat request: {reason}")]
    MalformedRequest { reason: String },

    #[error("Conversation contains no user message")]
    NoUserInput,

    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidConfig { key: String, value: String, reason: String },

    // ── System errors ────────────────────────────────────────────────────────
    #[error("Internal failure: {0}")]
    Internal(String),
}

impl AppError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        AppError::MalformedRequest { reason: reason.into() }
    }

    pub fn invalid_config(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AppError::InvalidConfig { key: key.into(), value: value.into(), reason: reason.into() }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::MalformedRequest { .. })
    }

    pub fn is_no_user_input(&self) -> bool {
        matches!(self, AppError::NoUserInput)
    }
}
