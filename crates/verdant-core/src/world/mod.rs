//! World management - terrain generation, chunks and viewport streaming

mod chunk;
mod chunk_manager;
pub mod generation;
mod retention;
mod viewport;
#[allow(clippy::module_inception)]
mod world;
pub mod worldgen_config;

pub use chunk::Chunk;
pub use chunk_manager::ChunkStore;
pub use generation::TerrainGenerator;
pub use retention::{LoadedChunkLimit, RetainAll, RetentionPolicy};
pub use viewport::{ViewBounds, Viewport};
pub use world::World;
pub use worldgen_config::{NoiseLayerConfig, TerrainGenConfig};
