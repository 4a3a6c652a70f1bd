//! Grouping and track selection.

use std::cmp::Reverse;
use tracing::debug;

use super::classify::Classifier;
use super::types::{AreaRule, Track, WorkItem};

/// Group items into areas and keep the highest-value `max_tracks` of them.
///
/// Areas are ranked by the sum of member scores, so a deep backlog of
/// mid-priority items can outrank a single high-priority outlier. Areas
/// beyond the cap are dropped from the plan, not merged or queued.
pub fn partition(items: &[WorkItem], rules: &[AreaRule], max_tracks: usize) -> Vec<Track> {
    let classifier = Classifier::new(rules);

    // Group in first-encounter order; the stable sort below keeps that
    // order for areas with equal score sums.
    let mut groups: Vec<(String, Vec<WorkItem>)> = Vec::new();
    for item in items {
        let area = classifier.classify(item);
        match groups.iter_mut().find(|(name, _)| name == &area) {
            Some((_, members)) => members.push(item.clone()),
            None => groups.push((area, vec![item.clone()])),
        }
    }

    for (_, members) in &mut groups {
        members.sort_by_key(|item| (Reverse(item.score()), item.number));
    }

    let mut tracks: Vec<Track> = groups
        .into_iter()
        .map(|(area, members)| Track::new(area, members))
        .collect();
    tracks.sort_by_key(|track| Reverse(track.total_score));

    if tracks.len() > max_tracks {
        for track in &tracks[max_tracks..] {
            debug!(
                "Dropping area '{}' ({} issues) beyond the {} track limit",
                track.area,
                track.items.len(),
                max_tracks
            );
        }
        tracks.truncate(max_tracks);
    }

    tracks
}
