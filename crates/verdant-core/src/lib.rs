//! Verdant core - terrain, chunk store and ecosystem controller

pub mod ecosystem;
pub mod world;

pub use ecosystem::{
    Census, ConfigError, Ecosystem, EcosystemConfig, Environment, EnvironmentConfig,
    PlacementKind, Season, SpawnConfig, SpeciesStats, WorldParams,
};
pub use world::{
    Chunk, ChunkStore, LoadedChunkLimit, RetainAll, RetentionPolicy, TerrainGenConfig,
    TerrainGenerator, ViewBounds, Viewport, World,
};

// Re-export the agent crates so downstream users need a single dependency
pub mod creature {
    pub use verdant_creature::*;
}
pub mod simulation {
    pub use verdant_simulation::*;
}
