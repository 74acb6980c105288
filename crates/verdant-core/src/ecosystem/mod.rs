//! Ecosystem controller and its supporting models

mod census;
mod config;
#[allow(clippy::module_inception)]
mod ecosystem;
mod environment;
mod spawner;

pub use census::{Census, SpeciesStats};
pub use config::{ConfigError, EcosystemConfig, WorldParams};
pub use ecosystem::Ecosystem;
pub use environment::{Environment, EnvironmentConfig, Season, SeasonTemperatures};
pub use spawner::{AmbientSpawner, PlacementKind, SpawnConfig};
