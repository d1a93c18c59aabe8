use regex::Regex;

/// Trims the ends and collapses every internal whitespace run to one space.
pub fn sanitize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips every match of `keywords` and returns what is left, sanitized.
/// An empty result means the input carried nothing beyond the keyword.
pub fn extract_focus(text: &str, keywords: &Regex) -> String {
    let stripped = keywords.replace_all(text, " ");
    sanitize(stripped.trim_matches(|c: char| c.is_whitespace() || is_edge_punctuation(c)))
}

fn is_edge_punctuation(c: char) -> bool {
    matches!(c, ',' | '.' | '?' | '!' | ':' | ';')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::intent::Intent;

    fn plan_focus(text: &str) -> String {
        extract_focus(text, Intent::Plan.focus_keywords().unwrap())
    }

    fn idea_focus(text: &str) -> String {
        extract_focus(text, Intent::Idea.focus_keywords().unwrap())
    }

    #[test]
    fn sanitize_collapses_and_trims() {
        assert_eq!(sanitize("  hello \t  there\n friend  "), "hello there friend");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let once = sanitize("  a   b  c ");
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn focus_strips_keyword_and_normalizes_whitespace() {
        assert_eq!(plan_focus("  plan   my    trip "), "my trip");
    }

    #[test]
    fn focus_is_case_insensitive_and_removes_inflected_forms() {
        assert_eq!(plan_focus("PLANNING a Launch"), "a Launch");
        assert_eq!(plan_focus("roadmap and timeline for the beta"), "and for the beta");
    }

    #[test]
    fn focus_is_empty_when_only_keywords_remain() {
        assert_eq!(idea_focus("  brainstorm?  "), "");
        assert_eq!(idea_focus("ideas"), "");
    }

    #[test]
    fn focus_is_idempotent() {
        let once = plan_focus("schedule  my   week, please");
        assert_eq!(once, "my week, please");
        assert_eq!(plan_focus(&once), once);
    }

    #[test]
    fn words_that_merely_start_with_a_keyword_survive() {
        assert_eq!(plan_focus("plan a trip to planet earth"), "a trip to planet earth");
        assert_eq!(
            idea_focus("ideas for an idealistic conceptual artist"),
            "for an idealistic conceptual artist"
        );
        assert_eq!(plan_focus("an explanation plan"), "an explanation");
    }
}
