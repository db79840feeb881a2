//! Engine configuration, loadable from TOML
//!
//! ```toml
//! seed = 7
//!
//! [levels.weak]
//! depth = 3
//! strategy = "minimax"
//!
//! [levels.strong]
//! depth = 8
//! strategy = "alpha_beta"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::Difficulty;
use crate::search::Strategy;

/// Deepest search accepted from a config file
pub const MAX_DEPTH: u8 = 12;

/// Search settings for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub depth: u8,
    pub strategy: Strategy,
}

impl From<Difficulty> for LevelConfig {
    fn from(level: Difficulty) -> Self {
        Self {
            depth: level.depth(),
            strategy: level.strategy(),
        }
    }
}

/// Search settings for every difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTable {
    pub weak: LevelConfig,
    pub medium: LevelConfig,
    pub strong: LevelConfig,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            weak: Difficulty::Weak.into(),
            medium: Difficulty::Medium.into(),
            strong: Difficulty::Strong.into(),
        }
    }
}

impl DifficultyTable {
    pub fn get(&self, level: Difficulty) -> LevelConfig {
        match level {
            Difficulty::Weak => self.weak,
            Difficulty::Medium => self.medium,
            Difficulty::Strong => self.strong,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for random tie-breaking; `None` keeps the first legal column
    pub seed: Option<u64>,
    pub levels: DifficultyTable,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for level in Difficulty::ALL {
            let depth = self.levels.get(level).depth;
            if depth == 0 || depth > MAX_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "{}.depth must be in 1..={MAX_DEPTH}, got {depth}",
                    level.to_string().to_lowercase()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.levels.weak.depth, 3);
        assert_eq!(config.levels.weak.strategy, Strategy::Minimax);
        assert_eq!(config.levels.medium.depth, 6);
        assert_eq!(config.levels.strong.strategy, Strategy::AlphaBeta);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
seed = 7

[levels.strong]
depth = 8
strategy = "alpha_beta"
"#;
        let config = EngineConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.levels.strong.depth, 8);
        // Unspecified levels keep their defaults
        assert_eq!(config.levels.weak, LevelConfig::from(Difficulty::Weak));
        assert_eq!(config.levels.medium, LevelConfig::from(Difficulty::Medium));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_rejects_zero_depth() {
        let toml_str = r#"
[levels.weak]
depth = 0
strategy = "minimax"
"#;
        let err = EngineConfig::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("weak.depth"));
    }

    #[test]
    fn test_rejects_excessive_depth() {
        let mut config = EngineConfig::default();
        config.levels.medium = LevelConfig {
            depth: MAX_DEPTH + 1,
            strategy: Strategy::AlphaBeta,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        let toml_str = r#"
[levels.weak]
depth = 2
strategy = "mcts"
"#;
        let err = EngineConfig::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = EngineConfig::default();
        config.seed = Some(3);
        let text = toml::to_string(&config).unwrap();
        let parsed = EngineConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            EngineConfig::load_or_default(Path::new("/nonexistent/connect4.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = EngineConfig::load(Path::new("/nonexistent/connect4.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
