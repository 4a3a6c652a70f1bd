//! Issue source collaborator: `gh` subprocess calls and local-file loading.

pub mod fetch;

pub use fetch::{fetch_open_issues, load_issues_from_file, parse_issue_list};
