use crate::planner::{Track, WorkItem};
use crate::workspace;

/// Issues shown per track in the plan section.
const PLAN_ISSUES_PER_TRACK: usize = 3;

/// Issues given setup/launch commands per track.
const SETUP_ISSUES_PER_TRACK: usize = 1;

const RULE_WIDTH: usize = 80;

/// Render the ranked track listing.
pub fn render_plan(tracks: &[Track]) -> String {
    let mut out = String::new();
    let rule = heavy_rule();

    // Header
    out.push('\n');
    out.push_str(&format!("{}\n", rule));
    out.push_str("PARALLEL ISSUES EXECUTION PLAN\n");
    out.push_str(&format!("{}\n", rule));

    let total_issues: usize = tracks.iter().map(|t| t.items.len()).sum();
    out.push_str(&format!("\nTotal tracks: {}\n", tracks.len()));
    out.push_str(&format!("Total issues to work: {}\n\n", total_issues));

    // One ruled block per track, top issues only
    for (i, track) in tracks.iter().enumerate() {
        let thin = light_rule();
        out.push_str(&format!("\n{}\n", thin));
        out.push_str(&format!("TRACK {}: {}\n", i + 1, track.area.to_uppercase()));
        out.push_str(&format!("{}\n", thin));

        for item in track.items.iter().take(PLAN_ISSUES_PER_TRACK) {
            out.push_str(&format!("\n  Issue #{}: {}\n", item.number, item.title));
            out.push_str(&format!(
                "  └─ Priority: {} | {} | Score: {}\n",
                format_priority(item),
                format_phase(item),
                item.score()
            ));
            out.push_str(&format!(
                "  └─ Worktree: {}\n",
                workspace::worktree_name(item)
            ));
            out.push_str(&format!("  └─ Branch: {}\n", workspace::branch_name(item)));
        }
    }

    out.push_str(&format!("\n{}\n", rule));
    out
}

/// Render the `git worktree` commands for the top issue of every track.
pub fn render_setup_commands(tracks: &[Track]) -> String {
    let mut out = String::new();
    let rule = heavy_rule();

    out.push('\n');
    out.push_str(&format!("{}\n", rule));
    out.push_str("GIT WORKTREE SETUP COMMANDS\n");
    out.push_str(&format!("{}\n\n", rule));

    for track in tracks {
        for item in track.items.iter().take(SETUP_ISSUES_PER_TRACK) {
            let title: String = item.title.chars().take(40).collect();
            out.push_str(&format!("# Issue #{}: {}\n", item.number, title));
            out.push_str(&format!(
                "git worktree add {} -b {}\n",
                workspace::worktree_name(item),
                workspace::branch_name(item)
            ));
            out.push('\n');
        }
    }

    out
}

/// Render the commented launch hints for working each track's top issue.
pub fn render_agent_commands(tracks: &[Track]) -> String {
    let mut out = String::new();
    let rule = heavy_rule();

    out.push('\n');
    out.push_str(&format!("{}\n", rule));
    out.push_str("SUB-AGENT LAUNCH COMMANDS (for Claude Code)\n");
    out.push_str(&format!("{}\n\n", rule));

    out.push_str("# Run these commands in parallel to work on issues simultaneously\n\n");

    for track in tracks {
        for item in track.items.iter().take(SETUP_ISSUES_PER_TRACK) {
            let title: String = item.title.chars().take(50).collect();
            out.push_str(&format!(
                "# Track: {} | Issue #{}: {}\n",
                track.area, item.number, title
            ));
            out.push_str(&format!(
                "# cd {} && # Work in this directory\n",
                workspace::worktree_name(item)
            ));
            out.push_str("# Read the issue and implement the feature\n");
        }
    }

    out
}

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn light_rule() -> String {
    "─".repeat(RULE_WIDTH)
}

fn format_phase(item: &WorkItem) -> String {
    match item.phase {
        Some(phase) => format!("Phase {}", phase),
        None => "No phase".to_string(),
    }
}

fn format_priority(item: &WorkItem) -> String {
    match &item.priority {
        Some(priority) => priority.as_str().to_uppercase(),
        None => "UNSET".to_string(),
    }
}
