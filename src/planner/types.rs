//! Core types for the planning pipeline: work items, area rules, tracks.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::extract;
use super::score::{self, Priority};

/// One backlog entry, enriched with attributes extracted from its body.
#[derive(Debug, Clone)]
pub struct WorkItem {
    /// Issue number, externally assigned, never reassigned
    pub number: u64,

    /// Issue title
    pub title: String,

    /// Free-text issue body, may be empty
    pub body: String,

    /// Label names as reported by the tracker
    #[allow(dead_code)]
    pub labels: Vec<String>,

    /// Phase marker extracted from the body
    pub phase: Option<u32>,

    /// Priority marker extracted from the body
    pub priority: Option<Priority>,

    /// Component marker extracted from the body; overrides keyword inference
    pub component: Option<String>,

    /// Numbers of blocking issues (schema slot, not populated by extraction)
    #[allow(dead_code)]
    pub dependencies: Vec<u64>,

    /// Effort tag (schema slot, unused by current logic)
    #[allow(dead_code)]
    pub effort: Option<String>,
}

impl WorkItem {
    /// Build an item from raw tracker fields, extracting the phase,
    /// priority, and component markers from the body. Extraction is a pure
    /// function of the body: the same text always yields the same fields.
    pub fn new(number: u64, title: String, body: String, labels: Vec<String>) -> Self {
        let phase = extract::phase(&body);
        let priority = extract::priority(&body);
        let component = extract::component(&body);

        Self {
            number,
            title,
            body,
            labels,
            phase,
            priority,
            component,
            dependencies: Vec::new(),
            effort: None,
        }
    }

    /// Importance score, higher first.
    pub fn score(&self) -> u32 {
        score::score(self.phase, self.priority.as_ref())
    }
}

/// One entry of the ordered classification table. Earlier rules win when
/// keywords from several rules match the same item.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct AreaRule {
    /// Area name, used as the track key (e.g., "game-engine")
    pub name: String,

    /// Substrings that assign an item to this area
    pub keywords: Vec<String>,
}

/// A named group of items that can be worked on concurrently with the
/// other tracks of the same plan.
#[derive(Debug, Clone)]
pub struct Track {
    /// Area name, unique within one plan
    pub area: String,

    /// Members, sorted by descending score then ascending number
    pub items: Vec<WorkItem>,

    /// Sum of member scores; ranks this track against the others
    pub total_score: u32,
}

impl Track {
    pub fn new(area: String, items: Vec<WorkItem>) -> Self {
        let total_score = items.iter().map(WorkItem::score).sum();
        Self {
            area,
            items,
            total_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_extracts_markers() {
        let item = WorkItem::new(
            7,
            "Add mana pool".to_string(),
            "Phase: 2\nPriority: High\nComponent: Engine".to_string(),
            vec!["enhancement".to_string()],
        );

        assert_eq!(item.phase, Some(2));
        assert_eq!(item.priority, Some(Priority::High));
        assert_eq!(item.component.as_deref(), Some("engine"));
        assert_eq!(item.score(), 120);
    }

    #[test]
    fn test_new_without_markers() {
        let item = WorkItem::new(3, "Fix typo".to_string(), String::new(), vec![]);

        assert_eq!(item.phase, None);
        assert_eq!(item.priority, None);
        assert_eq!(item.component, None);
        assert_eq!(item.score(), 30);
    }

    #[test]
    fn test_extraction_reads_body_not_title() {
        let item = WorkItem::new(
            4,
            "Phase: 1 in the title only".to_string(),
            "no markers".to_string(),
            vec![],
        );

        assert_eq!(item.phase, None);
    }

    #[test]
    fn test_track_total_score() {
        let a = WorkItem::new(
            1,
            "A".to_string(),
            "phase: 1\npriority: critical".to_string(),
            vec![],
        );
        let b = WorkItem::new(
            2,
            "B".to_string(),
            "phase: 1\npriority: low".to_string(),
            vec![],
        );

        let track = Track::new("game-engine".to_string(), vec![a, b]);
        assert_eq!(track.total_score, 260);
    }
}
