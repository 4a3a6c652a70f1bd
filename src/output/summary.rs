use crate::planner::{Track, WorkItem};

const RULE_WIDTH: usize = 80;

/// Render the closing summary: phase histogram, track totals, next steps.
pub fn render_summary(tracks: &[Track], items: &[WorkItem]) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    out.push('\n');
    out.push_str(&format!("{}\n", rule));
    out.push_str("EXECUTION SUMMARY\n");
    out.push_str(&format!("{}\n", rule));

    // Histogram over issues carrying an explicit phase marker
    let mut phase_counts: Vec<(u32, usize)> = Vec::new();
    for item in items {
        if let Some(phase) = item.phase {
            match phase_counts.iter_mut().find(|(p, _)| *p == phase) {
                Some((_, count)) => *count += 1,
                None => phase_counts.push((phase, 1)),
            }
        }
    }
    phase_counts.sort_unstable_by_key(|(phase, _)| *phase);

    out.push_str("\nAll open issues by phase:\n");
    for (phase, count) in &phase_counts {
        out.push_str(&format!("  Phase {}: {} issues\n", phase, count));
    }

    out.push_str(&format!("\nParallel tracks ({}):\n", tracks.len()));
    for track in tracks {
        out.push_str(&format!(
            "  {}: {} issues (total priority score: {})\n",
            track.area,
            track.items.len(),
            track.total_score
        ));
    }

    out.push('\n');
    out.push_str(&format!("{}\n", rule));
    out.push_str("\nNext steps:\n");
    out.push_str("1. Create worktrees using the commands above\n");
    out.push_str("2. For each worktree, launch a sub-agent or work on the issue\n");
    out.push_str("3. When complete, push and create PR with: gh pr create --body 'Closes #<issue>'\n\n");

    out
}
