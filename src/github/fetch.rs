//! Issue retrieval through the `gh` CLI and from local JSON files.

use serde::Deserialize;
use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::error::GitHubError;
use crate::planner::WorkItem;

/// Record shape produced by `gh issue list --json number,title,body,labels`.
#[derive(Debug, Deserialize)]
pub struct RawIssue {
    pub number: u64,

    pub title: String,

    /// Absent from some payloads, an explicit null in others; both read
    /// as an empty body.
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub labels: Vec<Label>,
}

/// `gh` reports labels as objects; hand-written fixture files may use
/// bare strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Named { name: String },
    Bare(String),
}

impl RawIssue {
    pub fn into_work_item(self) -> WorkItem {
        let labels = self
            .labels
            .into_iter()
            .map(|label| match label {
                Label::Named { name } => name,
                Label::Bare(name) => name,
            })
            .collect();

        WorkItem::new(self.number, self.title, self.body.unwrap_or_default(), labels)
    }
}

/// Parse a `gh issue list` JSON payload into work items.
pub fn parse_issue_list(payload: &[u8]) -> Result<Vec<WorkItem>, GitHubError> {
    let raw: Vec<RawIssue> = serde_json::from_slice(payload)
        .map_err(|e| GitHubError::ParseOutput(e.to_string()))?;

    Ok(raw.into_iter().map(RawIssue::into_work_item).collect())
}

/// Fetch open issues via the `gh` CLI. A non-zero exit is fatal and never
/// conflated with an empty result.
pub fn fetch_open_issues(repo: Option<&str>, limit: usize) -> Result<Vec<WorkItem>, GitHubError> {
    let mut cmd = Command::new("gh");
    cmd.arg("issue")
        .arg("list")
        .arg("--limit")
        .arg(limit.to_string())
        .arg("--state")
        .arg("open")
        .arg("--json")
        .arg("number,title,body,labels");

    if let Some(repo) = repo {
        cmd.arg("--repo").arg(repo);
    }

    debug!("Fetching up to {} open issues via gh", limit);
    let output = cmd.output().map_err(GitHubError::Io)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitHubError::GhCli(stderr.to_string()));
    }

    parse_issue_list(&output.stdout)
}

/// Load the same JSON shape from a local file, for offline planning runs.
pub fn load_issues_from_file(path: &Path) -> Result<Vec<WorkItem>, GitHubError> {
    let payload = std::fs::read(path)?;
    parse_issue_list(&payload)
}
