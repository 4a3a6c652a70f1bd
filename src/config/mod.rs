mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            max_parallel: default_max_parallel(),
            limit: default_limit(),
            repo: None,
            areas: default_area_rules(),
        }
    }
}

impl Config {
    /// Load config from a YAML file. An empty `areas` list falls back to
    /// the built-in table so a sparse config never disables classification.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config: Config = serde_yaml::from_str(&content)?;
        if config.areas.is_empty() {
            config.areas = default_area_rules();
        }
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, rule) in self.areas.iter().enumerate() {
            if rule.name.trim().is_empty() {
                return Err(ConfigError::BlankAreaName { index });
            }
            if rule.keywords.is_empty() {
                return Err(ConfigError::NoKeywords(rule.name.clone()));
            }
            if self.areas[..index].iter().any(|r| r.name == rule.name) {
                return Err(ConfigError::DuplicateArea(rule.name.clone()));
            }
        }

        Ok(())
    }
}
