use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::defaults::*;
use crate::planner::AreaRule;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Maximum number of parallel tracks in a plan
    #[serde(default = "default_max_parallel")]
    pub max_parallel: usize,

    /// Fetch cap for `gh issue list`
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Repository to plan against (owner/repo); `gh` uses the current
    /// directory's repo when unset
    #[serde(default)]
    pub repo: Option<String>,

    /// Ordered classification table; earlier areas win keyword ties.
    /// Empty or omitted means the built-in table.
    #[serde(default = "default_area_rules")]
    pub areas: Vec<AreaRule>,
}
