//! Deterministic workspace identifiers: worktree directories and branch
//! names derived from an item's number and sanitized title.

use regex::Regex;
use std::sync::LazyLock;

use crate::planner::WorkItem;

const SLUG_MAX_LEN: usize = 50;

static NON_SLUG_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATOR_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Sanitized, lower-cased, length-capped slug of a title. The same title
/// always yields the same slug.
pub fn slug(title: &str) -> String {
    let cleaned = NON_SLUG_CHARS.replace_all(title, "");
    let dashed = SEPARATOR_RUNS.replace_all(&cleaned, "-");
    dashed
        .trim_matches('-')
        .to_lowercase()
        .chars()
        .take(SLUG_MAX_LEN)
        .collect()
}

/// Worktree directory for an issue, as a sibling of the main checkout.
pub fn worktree_name(item: &WorkItem) -> String {
    format!("../feature-issue-{}-{}", item.number, slug(&item.title))
}

/// Branch name for an issue.
pub fn branch_name(item: &WorkItem) -> String {
    format!("feature/issue-{}", item.number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(number: u64, title: &str) -> WorkItem {
        WorkItem::new(number, title.to_string(), String::new(), vec![])
    }

    #[test]
    fn test_slug_sanitizes_and_lowercases() {
        assert_eq!(slug("Add WebRTC P2P support!"), "add-webrtc-p2p-support");
        assert_eq!(slug("Fix: combat / stack (v2)"), "fix-combat-stack-v2");
    }

    #[test]
    fn test_slug_caps_length_by_characters() {
        let long = "word ".repeat(20);
        assert_eq!(slug(&long).chars().count(), 50);

        // Multi-byte characters survive the cap without splitting.
        assert_eq!(slug("Café ☕ München"), "café-münchen");
    }

    #[test]
    fn test_slug_strips_edge_hyphens() {
        assert_eq!(slug("--- spiky title ---"), "spiky-title");
    }

    #[test]
    fn test_identifiers_are_stable() {
        let a = item(42, "Add lobby chat");

        assert_eq!(worktree_name(&a), "../feature-issue-42-add-lobby-chat");
        assert_eq!(branch_name(&a), "feature/issue-42");
        assert_eq!(worktree_name(&a), worktree_name(&item(42, "Add lobby chat")));
    }

    #[test]
    fn test_symbol_only_title_yields_empty_slug() {
        assert_eq!(worktree_name(&item(7, "!!!")), "../feature-issue-7-");
    }
}
