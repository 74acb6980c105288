//! Application configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `verdant.ron` in the working directory, or the file given with `--config`
//! 3. Environment variables prefixed with `VERDANT_`
//!
//! Command-line flags are applied on top by the binary.
//!
//! Example environment variable: `VERDANT_ECOSYSTEM__SEED=7`

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use verdant_core::EcosystemConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ecosystem: EcosystemConfig,

    #[serde(default)]
    pub run: RunConfig,
}

/// Headless run loop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of ticks to simulate
    pub ticks: u64,
    /// Seconds per tick
    pub dt: f32,
    /// Log a census report every N ticks (0 disables periodic reports)
    pub report_every: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 3600,
            dt: 1.0 / 60.0,
            report_every: 600,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            anyhow::bail!("run.dt must be positive, got {}", self.dt);
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. Config file: `path` if given (must exist), else optional `verdant.ron`
    /// 3. Environment variables prefixed with `VERDANT_` (highest priority)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        // Layer 1: Compiled defaults
        let defaults =
            Config::try_from(&AppConfig::default()).context("Failed to serialize defaults")?;

        // Layer 2: Config file
        let file = match path {
            Some(path) => File::from(path.to_path_buf())
                .format(FileFormat::Ron)
                .required(true),
            None => File::with_name("verdant")
                .format(FileFormat::Ron)
                .required(false),
        };

        let config = Config::builder()
            .add_source(defaults)
            .add_source(file)
            // Layer 3: Environment variables (VERDANT_RUN__TICKS, etc.)
            .add_source(
                Environment::with_prefix("VERDANT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let app: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        app.validate()?;
        Ok(app)
    }

    pub fn validate(&self) -> Result<()> {
        self.run.validate()?;
        self.ecosystem
            .validate()
            .context("Invalid ecosystem configuration")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.run.ticks, 3600);
        assert_eq!(config.run.report_every, 600);
        assert_eq!(config.ecosystem.world.size_chunks, 64);
        assert_eq!(config.ecosystem.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_explicit_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("verdant-app-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("custom.ron");
        std::fs::write(
            &path,
            "(run: (ticks: 10), ecosystem: (world: (size_chunks: 4)))",
        )
        .unwrap();

        let config = AppConfig::load(Some(path.as_path())).expect("Failed to load config");
        assert_eq!(config.run.ticks, 10);
        assert_eq!(config.run.report_every, 600);
        assert_eq!(config.ecosystem.world.size_chunks, 4);
        assert_eq!(config.ecosystem.spawning.initial_trees, 200);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/verdant.ron"))).is_err());
    }

    #[test]
    fn test_non_positive_dt_rejected() {
        let mut config = AppConfig::default();
        config.run.dt = 0.0;
        assert!(config.validate().is_err());
    }
}
