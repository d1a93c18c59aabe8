use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Message, MessageRole};

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("intent pattern must compile")
}

static GREETING: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?i)\b(?:hi|hello|hey|hiya|howdy|greetings|good (?:morning|afternoon|evening))\b")
});
static THANKS: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)\b(?:thanks|thank you|thank u|thx|ty|appreciate it)\b"));
static FAREWELL: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)\b(?:bye|goodbye|good night|see (?:you|ya)|farewell)\b"));
static IDENTITY: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)\b(?:who|what) are (?:you|u)\b|\byour name\b"));
// Also used to strip the keyword out of the focus text.
static PLAN: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)\b(?:plan|schedule|timeline|roadmap)(?:s|ned|ning|d)?\b"));
static IDEA: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)\b(?:ideas?|brainstorm(?:ing)?|concepts?)\b"));
static JOKE: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)\b(?:jokes?|funny|laugh(?:s|ing|ter)?)\b"));
static WEATHER: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)\b(?:weather|temperature|outside)\b"));
static TIME: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)\btime\b"));
static EXPLAIN: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?i)\b(?:explain|teach|learn|understand)(?:s|ed|ing)?\b")
});
static SUMMARY: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)\b(?:summary|summari[sz]e|recap)\b"));
static EXPAND: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)\bexpand\b"));

/// The bucket a user utterance is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Thanks,
    Farewell,
    Identity,
    Plan,
    Idea,
    Joke,
    Weather,
    Time,
    Explain,
    Summary,
    ExpandFollowUp,
    Fallback,
}

impl Intent {
    /// Evaluation order. An utterance can satisfy several predicates;
    /// the first one listed here wins.
    pub const PRIORITY: [Intent; 12] = [
        Intent::Greeting,
        Intent::Thanks,
        Intent::Farewell,
        Intent::Identity,
        Intent::Plan,
        Intent::Idea,
        Intent::Joke,
        Intent::Weather,
        Intent::Time,
        Intent::Explain,
        Intent::Summary,
        Intent::ExpandFollowUp,
    ];

    pub fn classify(text: &str, history: &[Message]) -> Intent {
        let lowered = text.to_lowercase();
        Intent::PRIORITY
            .into_iter()
            .find(|intent| intent.matches(&lowered, history))
            .unwrap_or(Intent::Fallback)
    }

    fn matches(&self, lowered: &str, history: &[Message]) -> bool {
        match self {
            Intent::ExpandFollowUp => {
                EXPAND.is_match(lowered)
                    && history.iter().any(|m| m.role == MessageRole::Assistant)
            }
            Intent::Fallback => false,
            other => other.pattern().is_some_and(|p| p.is_match(lowered)),
        }
    }

    fn pattern(&self) -> Option<&'static Regex> {
        let lazy = match self {
            Intent::Greeting => &GREETING,
            Intent::Thanks => &THANKS,
            Intent::Farewell => &FAREWELL,
            Intent::Identity => &IDENTITY,
            Intent::Plan => &PLAN,
            Intent::Idea => &IDEA,
            Intent::Joke => &JOKE,
            Intent::Weather => &WEATHER,
            Intent::Time => &TIME,
            Intent::Explain => &EXPLAIN,
            Intent::Summary => &SUMMARY,
            Intent::ExpandFollowUp => &EXPAND,
            Intent::Fallback => return None,
        };
        Some(Lazy::force(lazy))
    }

    /// The keyword pattern stripped from the input when a template
    /// interpolates the focus. Same pattern that triggers the intent.
    pub fn focus_keywords(&self) -> Option<&'static Regex> {
        match self {
            Intent::Plan | Intent::Idea => self.pattern(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Thanks => "thanks",
            Intent::Farewell => "farewell",
            Intent::Identity => "identity",
            Intent::Plan => "plan",
            Intent::Idea => "idea",
            Intent::Joke => "joke",
            Intent::Weather => "weather",
            Intent::Time => "time",
            Intent::Explain => "explain",
            Intent::Summary => "summary",
            Intent::ExpandFollowUp => "expand_follow_up",
            Intent::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
