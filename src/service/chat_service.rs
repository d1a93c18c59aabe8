use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse};
use crate::responder::Responder;

/// Stateless per call: the caller re-sends the whole history every time.
#[derive(Clone)]
pub struct ChatService {
    responder: Responder,
}

impl ChatService {
    pub fn new(responder: Responder) -> Self {
        Self { responder }
    }

    pub fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let latest = request.latest_user_message().ok_or(AppError::NoUserInput)?;
        Ok(self.responder.respond(&latest.content, &request.messages))
    }
}
