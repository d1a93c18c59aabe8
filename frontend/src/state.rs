use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{default_suggestions, suggestions_or_default, Message};

/// Shared application state, provided via Leptos context.
///
/// The message list lives only here; every request re-sends all of it.
#[derive(Clone, Copy)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub messages: ReadSignal<Vec<Message>>,
    pub suggestions: ReadSignal<Vec<String>>,
    pub is_sending: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,

    // --- Write signals (for mutating state) ---
    pub set_messages: WriteSignal<Vec<Message>>,
    pub set_suggestions: WriteSignal<Vec<String>>,
    pub set_is_sending: WriteSignal<bool>,
    pub set_error: WriteSignal<Option<String>>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (messages, set_messages) = signal(Vec::<Message>::new());
        let (suggestions, set_suggestions) = signal(default_suggestions());
        let (is_sending, set_is_sending) = signal(false);
        let (error, set_error) = signal(None::<String>);

        let state = Self {
            messages,
            suggestions,
            is_sending,
            error,
            set_messages,
            set_suggestions,
            set_is_sending,
            set_error,
        };

        provide_context(state);
        state
    }

    /// Append the user's message, post the whole history, then append the reply.
    pub fn send_message(&self, text: String) {
        let state = *self;

        self.set_messages.update(|msgs| msgs.push(Message::user(text)));
        self.set_is_sending.set(true);
        self.set_error.set(None);
        let history = self.messages.get_untracked();

        spawn_local(async move {
            match api::send_chat(&history).await {
                Ok(response) => {
                    state
                        .set_messages
                        .update(|msgs| msgs.push(Message::assistant(response.reply)));
                    state
                        .set_suggestions
                        .set(suggestions_or_default(response.suggestions));
                }
                Err(e) => {
                    log::error!("Chat request failed: {e}");
                    state.set_error.set(Some(e));
                }
            }
            state.set_is_sending.set(false);
        });
    }
}
