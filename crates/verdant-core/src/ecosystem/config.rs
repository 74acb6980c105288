//! Ecosystem configuration
//!
//! Serialized as RON. Every section has defaults, so a config file only
//! needs to name the values it changes.

use std::path::{Path, PathBuf};

use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use verdant_creature::BehaviorTuning;

use super::environment::EnvironmentConfig;
use super::spawner::SpawnConfig;
use crate::world::TerrainGenConfig;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// World extent and chunk retention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldParams {
    /// Side length of the square world in chunks
    pub size_chunks: i32,
    /// Cap on loaded chunks; None keeps every generated chunk
    pub max_loaded_chunks: Option<usize>,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            size_chunks: 64,
            max_loaded_chunks: None,
        }
    }
}

/// Top-level ecosystem configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcosystemConfig {
    /// Seed for terrain and behavior; None picks a random seed
    pub seed: Option<u64>,
    pub world: WorldParams,
    pub terrain: TerrainGenConfig,
    pub environment: EnvironmentConfig,
    pub spawning: SpawnConfig,
    pub behavior: BehaviorTuning,
}

impl EcosystemConfig {
    /// Default configuration with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&text)?;
        log::info!("Loaded ecosystem config from {}", path.display());
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, PrettyConfig::default())?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world.size_chunks <= 0 {
            return Err(ConfigError::Invalid(
                "world.size_chunks must be positive".to_string(),
            ));
        }
        if self.world.max_loaded_chunks == Some(0) {
            return Err(ConfigError::Invalid(
                "world.max_loaded_chunks must be at least 1".to_string(),
            ));
        }
        self.terrain.validate().map_err(ConfigError::Invalid)?;
        self.environment.validate().map_err(ConfigError::Invalid)?;
        self.spawning.validate().map_err(ConfigError::Invalid)?;
        self.behavior.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EcosystemConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_ron_fills_defaults() {
        let config = EcosystemConfig::from_ron_str(
            "(seed: Some(7), world: (size_chunks: 8), spawning: (initial_wolves: 2))",
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.world.size_chunks, 8);
        assert_eq!(config.world.max_loaded_chunks, None);
        assert_eq!(config.spawning.initial_wolves, 2);
        assert_eq!(config.spawning.initial_trees, 200);
        assert_eq!(config.behavior, BehaviorTuning::default());
    }

    #[test]
    fn test_roundtrip_through_ron() {
        let mut config = EcosystemConfig::with_seed(42);
        config.world.max_loaded_chunks = Some(256);
        let text = config.to_ron_string().unwrap();
        assert_eq!(EcosystemConfig::from_ron_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = EcosystemConfig::from_ron_str("(world: (size_chunks: 0))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = EcosystemConfig::from_ron_str("(spawning: (interval: -1.0))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_parse_error_reported() {
        let err = EcosystemConfig::from_ron_str("(seed: \"seven\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EcosystemConfig::load("/nonexistent/verdant.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/verdant.ron"));
    }
}
