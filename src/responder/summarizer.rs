use crate::models::Message;
use crate::responder::text::sanitize;

const RECAP_LEN: usize = 3;

pub const NOTHING_TO_RECAP: &str = "You've mostly been exploring so far, so there isn't much \
                                    to recap yet. Ask me something and I'll keep track.";
const RECAP_PREAMBLE: &str = "Here's a quick recap of what you've asked about recently:";
const RECAP_CLOSING: &str = "Let me know which one you'd like to dig into next.";

/// Recaps the last three user turns, oldest first, as a numbered list.
pub fn summarize(history: &[Message]) -> String {
    let user_turns: Vec<&Message> = history.iter().filter(|m| m.is_user()).collect();
    if user_turns.is_empty() {
        return NOTHING_TO_RECAP.to_string();
    }

    let recent = &user_turns[user_turns.len().saturating_sub(RECAP_LEN)..];
    let items = recent
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{}. {}", i + 1, sanitize(&m.content)))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{RECAP_PREAMBLE}\n{items}\n{RECAP_CLOSING}")
}
