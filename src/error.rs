use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Area rule #{index} has a blank name")]
    BlankAreaName { index: usize },

    #[error("Duplicate area '{0}' in classification table")]
    DuplicateArea(String),

    #[error("Area '{0}' has no keywords")]
    NoKeywords(String),
}

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("gh CLI failed: {0}")]
    GhCli(String),

    #[error("Failed to parse gh output: {0}")]
    ParseOutput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
