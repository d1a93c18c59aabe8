pub mod clock;
pub mod intent;
pub mod summarizer;
pub mod text;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::DEFAULT_TIME_FORMAT;
use crate::models::{ChatResponse, Message};

use self::clock::{render_time, Clock, SystemClock};
use self::intent::Intent;
use self::summarizer::summarize;
use self::text::{extract_focus, sanitize};

pub const DEFAULT_SUGGESTIONS: [&str; 3] =
    ["Help me plan my week", "Brainstorm some ideas", "Explain a concept to me"];

pub const GREETING_REPLY: &str = "Hi there! I'm your pocket assistant. I can help you plan, \
                                  brainstorm, explain things, or just chat. What's on your mind today?";
pub const THANKS_REPLY: &str = "You're very welcome! Want to keep going? I can dig deeper, \
                                recap what we've covered, or start on something new.";
pub const FAREWELL_REPLY: &str = "Goodbye for now! Come back any time you want to plan, \
                                  brainstorm, or just think out loud.";
pub const IDENTITY_REPLY: &str = "I'm a lightweight chat assistant that works from a handful of \
                                  simple patterns. I don't browse the web or remember past sessions, \
                                  but I can help you plan, brainstorm ideas, explain concepts, and \
                                  recap our conversation.";
pub const JOKE: &str = "Why do programmers prefer dark mode? Because light attracts bugs!";
pub const WEATHER_REPLY: &str = "I can't check live conditions, so a quick look at your local \
                                 forecast is the safest bet. When in doubt, pack a light layer and \
                                 an umbrella: it's easier to take something off than to wish you had it.";
pub const EXPLAIN_REPLY: &str = "Here's a simple way to get your head around almost anything:\n\
                                 1. Start with the big picture: what problem does it solve?\n\
                                 2. Learn the key terms and how they connect.\n\
                                 3. Work through one small, concrete example.\n\
                                 4. Explain it back in your own words to find the gaps.";
pub const EXPAND_REPLY: &str = "Happy to go deeper. Which part should I expand on: the first \
                                point, the overall approach, or the next steps?";

/// Turns the latest user utterance into a canned reply plus follow-up prompts.
///
/// Total over its input: anything that matches no predicate lands in the
/// fallback, which echoes the sanitized text back.
#[derive(Clone)]
pub struct Responder {
    clock: Arc<dyn Clock>,
    time_format: String,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), DEFAULT_TIME_FORMAT)
    }
}

impl Responder {
    pub fn new(clock: Arc<dyn Clock>, time_format: impl Into<String>) -> Self {
        Self { clock, time_format: time_format.into() }
    }

    pub fn respond(&self, text: &str, history: &[Message]) -> ChatResponse {
        let intent = Intent::classify(text, history);
        debug!(%intent, history_len = history.len(), "classified user message");

        match intent {
            Intent::Greeting => ChatResponse::new(
                GREETING_REPLY,
                &["Help me plan my day", "Give me some project ideas", "Tell me a joke"],
            ),
            Intent::Thanks => ChatResponse::new(
                THANKS_REPLY,
                &["Summarize our chat", "Expand on that", "Start a new plan"],
            ),
            Intent::Farewell => ChatResponse::new(
                FAREWELL_REPLY,
                &["Actually, one more thing", "Help me plan tomorrow", "Tell me a joke before I go"],
            ),
            Intent::Identity => ChatResponse::new(
                IDENTITY_REPLY,
                &["What can you help with?", "Help me brainstorm", "Summarize our chat"],
            ),
            Intent::Plan => ChatResponse::new(
                plan_reply(&focus(text, intent)),
                &["Make it a weekly schedule", "What should I tackle first?", "Help me set milestones"],
            ),
            Intent::Idea => ChatResponse::new(
                idea_reply(&focus(text, intent)),
                &["Give me more ideas", "Which idea is strongest?", "Turn an idea into a plan"],
            ),
            Intent::Joke => ChatResponse::new(
                format!("Here's one for you: {JOKE}"),
                &["Tell me another joke", "Something more serious", "Help me plan my day"],
            ),
            Intent::Weather => ChatResponse::new(
                WEATHER_REPLY,
                &["Plan a day out", "Ideas for a rainy day", "What time is it?"],
            ),
            Intent::Time => ChatResponse::new(
                self.time_reply(),
                &["Plan the rest of my day", "Give me a quick break idea", "Tell me a joke"],
            ),
            Intent::Explain => ChatResponse::new(
                EXPLAIN_REPLY,
                &["Give me an example", "Quiz me on it", "Summarize that"],
            ),
            Intent::Summary => ChatResponse::new(
                summarize(history),
                &["Expand on that", "Turn this into a plan", "What should I do next?"],
            ),
            Intent::ExpandFollowUp => ChatResponse::new(
                EXPAND_REPLY,
                &["The first point", "The overall approach", "The next steps"],
            ),
            Intent::Fallback => ChatResponse::new(fallback_reply(&sanitize(text)), &DEFAULT_SUGGESTIONS),
        }
    }

    fn time_reply(&self) -> String {
        let now = self.clock.now();
        let rendered = render_time(now, &self.time_format).unwrap_or_else(|| {
            warn!(format = %self.time_format, "time format cannot render a time of day");
            render_time(now, DEFAULT_TIME_FORMAT).unwrap_or_default()
        });
        format!("It's {rendered} on my clock. Want help planning what to do with the rest of your day?")
    }
}

fn focus(text: &str, intent: Intent) -> String {
    intent
        .focus_keywords()
        .map(|keywords| extract_focus(text, keywords))
        .unwrap_or_default()
}

fn plan_reply(focus: &str) -> String {
    let heading = if focus.is_empty() {
        "Here's a starter plan:".to_string()
    } else {
        format!("Here's a starter plan tailored to \"{focus}\":")
    };
    format!(
        "{heading}\n\
         • Define the goal: write down what \"done\" looks like.\n\
         • Break it down: list the three to five milestones that get you there.\n\
         • Put it on the calendar: give each milestone a realistic date or time block.\n\
         • Review weekly: check progress and adjust the next steps."
    )
}

fn idea_reply(focus: &str) -> String {
    let heading = if focus.is_empty() {
        "Here are a few ideas to get you started:".to_string()
    } else {
        format!("Here are a few ideas to shape {focus}:")
    };
    format!(
        "{heading}\n\
         1. Start from the problem: who is this for, and what bugs them most?\n\
         2. Mash two things together: borrow a trick from an unrelated field.\n\
         3. Flip it: imagine the opposite approach and see what survives."
    )
}

fn fallback_reply(text: &str) -> String {
    if text.is_empty() {
        return "I didn't quite catch that. Tell me a bit more and I can help you clarify \
                what you're after, outline some next steps, or find some inspiration."
            .to_string();
    }
    format!(
        "You said: \"{text}\". I can help you clarify what you're after, outline some next \
         steps, or find some inspiration. Which would be most useful?"
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::clock::FixedClock;
    use super::*;

    fn responder() -> Responder {
        let clock = FixedClock(NaiveTime::from_hms_opt(14, 5, 0).unwrap());
        Responder::new(Arc::new(clock), DEFAULT_TIME_FORMAT)
    }

    #[test]
    fn greeting_ignores_history_length() {
        let long_history: Vec<Message> = (0..20)
            .map(|i| if i % 2 == 0 { Message::user("x") } else { Message::assistant("y") })
            .collect();

        for text in ["hi", "hello", "good morning"] {
            for history in [&[][..], &long_history[..]] {
                let response = responder().respond(text, history);
                assert_eq!(response.reply, GREETING_REPLY);
                assert_eq!(response.suggestions.len(), 3);
            }
        }
    }

    #[test]
    fn thanks_beats_plan() {
        let response = responder().respond("thanks for the plan", &[]);
        assert_eq!(response.reply, THANKS_REPLY);
    }

    #[test]
    fn plan_interpolates_focus() {
        let response = responder().respond("  plan   my    trip ", &[]);
        assert!(response.reply.starts_with("Here's a starter plan tailored to \"my trip\":"));
        assert_eq!(response.reply.lines().filter(|l| l.starts_with('•')).count(), 4);
        assert_eq!(response.suggestions.len(), 3);
    }

    #[test]
    fn plan_without_focus_omits_the_clause() {
        let response = responder().respond("Schedule!", &[]);
        assert!(response.reply.starts_with("Here's a starter plan:\n"));
    }

    #[test]
    fn idea_lists_three_items() {
        let response = responder().respond("brainstorm a birthday party", &[]);
        assert!(response.reply.starts_with("Here are a few ideas to shape a birthday party:"));
        for n in ["1. ", "2. ", "3. "] {
            assert!(response.reply.contains(n));
        }
        assert!(!response.reply.contains("4. "));

        let bare = responder().respond("ideas?", &[]);
        assert!(bare.reply.starts_with("Here are a few ideas to get you started:"));
    }

    #[test]
    fn joke_contains_the_joke() {
        let response = responder().respond("tell me a joke", &[]);
        assert!(response.reply.contains(JOKE));
        assert_eq!(response.suggestions.len(), 3);
    }

    #[test]
    fn time_uses_the_injected_clock() {
        let response = responder().respond("what time is it?", &[]);
        assert!(response.reply.contains("02:05 PM"), "{}", response.reply);

        let twenty_four_hour = Responder::new(
            Arc::new(FixedClock(NaiveTime::from_hms_opt(14, 5, 0).unwrap())),
            "%H:%M",
        );
        assert!(twenty_four_hour.respond("time?", &[]).reply.contains("14:05"));
    }

    #[test]
    fn unrenderable_time_format_falls_back_to_default() {
        let clock = FixedClock(NaiveTime::from_hms_opt(14, 5, 0).unwrap());
        for pattern in ["%Y-%m-%d %H:%M", "%H:%M %Z"] {
            let response = Responder::new(Arc::new(clock), pattern).respond("what time is it", &[]);
            assert!(response.reply.contains("02:05 PM"), "{pattern}: {}", response.reply);
        }
    }

    #[test]
    fn idea_focus_keeps_words_sharing_a_keyword_prefix() {
        let response = responder().respond("ideas for an idealistic artist", &[]);
        assert!(response.reply.starts_with("Here are a few ideas to shape for an idealistic artist:"));
    }

    #[test]
    fn summary_recaps_user_turns() {
        let history = vec![
            Message::user("plan my week"),
            Message::assistant("Here's a starter plan"),
            Message::user("summarize"),
        ];
        let response = responder().respond("summarize", &history);
        assert!(response.reply.contains("1. plan my week\n2. summarize"));
        assert_eq!(response.suggestions.len(), 3);
    }

    #[test]
    fn expand_follows_an_assistant_turn() {
        let history = vec![Message::user("hmm"), Message::assistant("an answer")];
        assert_eq!(responder().respond("expand on that", &history).reply, EXPAND_REPLY);
        assert_ne!(responder().respond("expand on that", &[]).reply, EXPAND_REPLY);
    }

    #[test]
    fn fallback_echoes_sanitized_input() {
        let response = responder().respond("  xyzzy   quux ", &[]);
        assert!(response.reply.contains("\"xyzzy quux\""));
        assert_eq!(response.suggestions, DEFAULT_SUGGESTIONS.map(String::from).to_vec());
    }

    #[test]
    fn blank_input_still_gets_a_reply() {
        let response = responder().respond("   ", &[]);
        assert!(!response.reply.is_empty());
        assert!(!response.reply.contains("\"\""));
        assert_eq!(response.suggestions.len(), 3);
    }

    #[test]
    fn every_branch_offers_three_suggestions() {
        let history = vec![Message::user("hi"), Message::assistant("hello")];
        for text in [
            "thanks", "bye", "who are you", "roadmap", "idea", "funny", "weather", "time",
            "teach me", "recap", "expand", "anything else",
        ] {
            assert_eq!(responder().respond(text, &history).suggestions.len(), 3, "{text}");
        }
    }
}
