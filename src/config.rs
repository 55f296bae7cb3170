use std::collections::HashSet;
use std::path::Path;

use crate::ai::minimax::MAX_DEPTH;
use crate::ai::{MoveSelector, RuleConfig, SearchConfig, Strategy};
use crate::error::ConfigError;
use crate::game::COLS;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub strategy: Strategy,
    /// Fixed seed for the random rules; unset means seeded from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub search: SearchConfig,
    pub rules: RuleConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation(
                "search.depth must be >= 1".into(),
            ));
        }
        if self.search.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {MAX_DEPTH}"
            )));
        }
        if self.search.max_nodes == Some(0) {
            return Err(ConfigError::Validation(
                "search.max_nodes must be >= 1 when set".into(),
            ));
        }

        let mut seen = HashSet::new();
        for &col in &self.rules.priority_columns {
            if col >= COLS {
                return Err(ConfigError::Validation(format!(
                    "rules.priority_columns entry {col} must be < {COLS}"
                )));
            }
            if !seen.insert(col) {
                return Err(ConfigError::Validation(format!(
                    "rules.priority_columns lists column {col} twice"
                )));
            }
        }

        Ok(())
    }

    /// Build a move selector from this configuration.
    pub fn selector(&self) -> MoveSelector {
        MoveSelector::new(
            self.strategy,
            self.rules.clone(),
            self.search.clone(),
            self.seed,
        )
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
