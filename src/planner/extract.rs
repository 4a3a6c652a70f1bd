//! Marker extraction from free-text issue bodies.
//!
//! Markers are optional `phase:`, `priority:`, and `component:` annotations
//! anywhere in the text. Absence is a normal state, never an error: every
//! function returns `None` when its marker is missing.

use regex::Regex;
use std::sync::LazyLock;

use super::score::Priority;

static PHASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)phase[:\s]+(\d+)").unwrap());

static PRIORITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)priority[:\s]+(\w+)").unwrap());

static COMPONENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)component[:\s]+(\w+)").unwrap());

/// First phase marker in the text, if any.
pub fn phase(text: &str) -> Option<u32> {
    PHASE_RE.captures(text).and_then(|caps| caps[1].parse().ok())
}

/// First priority marker in the text, if any. Unknown tokens are kept as
/// [`Priority::Other`] rather than dropped.
pub fn priority(text: &str) -> Option<Priority> {
    PRIORITY_RE
        .captures(text)
        .map(|caps| Priority::parse(&caps[1]))
}

/// First component marker in the text, lower-cased, if any.
pub fn component(text: &str) -> Option<String> {
    COMPONENT_RE
        .captures(text)
        .map(|caps| caps[1].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_with_colon() {
        assert_eq!(phase("Phase: 3"), Some(3));
    }

    #[test]
    fn test_phase_case_and_spacing_variants() {
        assert_eq!(phase("phase:3"), Some(3));
        assert_eq!(phase("PHASE:   3"), Some(3));
        assert_eq!(phase("pHaSe:\t3"), Some(3));
        assert_eq!(phase("part of phase 3 cleanup"), Some(3));
    }

    #[test]
    fn test_phase_requires_separator() {
        assert_eq!(phase("phase3"), None);
    }

    #[test]
    fn test_phase_first_match_wins() {
        assert_eq!(phase("phase: 1 supersedes phase: 2"), Some(1));
    }

    #[test]
    fn test_phase_absent() {
        assert_eq!(phase("no markers anywhere"), None);
        assert_eq!(phase(""), None);
    }

    #[test]
    fn test_priority_known_tokens() {
        assert_eq!(priority("Priority: Critical"), Some(Priority::Critical));
        assert_eq!(priority("priority high"), Some(Priority::High));
        assert_eq!(priority("PRIORITY: medium"), Some(Priority::Medium));
        assert_eq!(priority("priority:low"), Some(Priority::Low));
    }

    #[test]
    fn test_priority_unknown_token_is_kept() {
        assert_eq!(
            priority("priority: urgent"),
            Some(Priority::Other("urgent".to_string()))
        );
    }

    #[test]
    fn test_priority_absent() {
        assert_eq!(priority("just prose"), None);
    }

    #[test]
    fn test_component_lowercased() {
        assert_eq!(
            component("Component: GameEngine").as_deref(),
            Some("gameengine")
        );
        assert_eq!(component("component: ui").as_deref(), Some("ui"));
    }

    #[test]
    fn test_component_absent() {
        assert_eq!(component("nothing to see"), None);
    }

    #[test]
    fn test_markers_in_longer_body() {
        let body = "Implements the combat stack.\n\nPhase: 2\nPriority: high\nComponent: engine\n";
        assert_eq!(phase(body), Some(2));
        assert_eq!(priority(body), Some(Priority::High));
        assert_eq!(component(body).as_deref(), Some("engine"));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let body = "Phase: 2 with priority: high";
        assert_eq!(phase(body), phase(body));
        assert_eq!(priority(body), priority(body));
    }
}
