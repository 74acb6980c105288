//! Procedural terrain generation
//!
//! Height and moisture are pure functions of world tile coordinates for a
//! fixed seed and config, so a chunk can be regenerated at any time and
//! will come out identical.

use fastnoise_lite::FastNoiseLite;
use verdant_simulation::{CHUNK_AREA, CHUNK_SIZE, Tile};

use super::chunk::Chunk;
use super::worldgen_config::TerrainGenConfig;

/// Terrain generator built from layered coherent noise
pub struct TerrainGenerator {
    seed: u64,
    config: TerrainGenConfig,

    base_noise: FastNoiseLite,     // freq=0.02
    mountain_noise: FastNoiseLite, // freq=0.005
    detail_noise: FastNoiseLite,   // freq=0.1
}

impl TerrainGenerator {
    /// Create a generator with the default configuration
    pub fn new(seed: u64) -> Self {
        Self::from_config(seed, TerrainGenConfig::default())
    }

    pub fn from_config(seed: u64, config: TerrainGenConfig) -> Self {
        let base_noise = config.base.build_noise(seed);
        let mountain_noise = config.mountains.build_noise(seed);
        let detail_noise = config.detail.build_noise(seed);

        Self {
            seed,
            config,
            base_noise,
            mountain_noise,
            detail_noise,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &TerrainGenConfig {
        &self.config
    }

    /// Raw terrain height at a world tile
    ///
    /// Base field plus positive mountain contributions plus a small detail term.
    pub fn height(&self, tile_x: i32, tile_y: i32) -> f32 {
        let (x, y) = (tile_x as f32, tile_y as f32);
        let base = self.base_noise.get_noise_2d(x, y);
        let mountains = self.mountain_noise.get_noise_2d(x, y) * self.config.mountain_weight;
        let detail = self.detail_noise.get_noise_2d(x, y) * self.config.detail_weight;
        base + mountains.max(0.0) + detail
    }

    /// Moisture at a world tile, normalized to [0, 1]
    pub fn moisture(&self, tile_x: i32, tile_y: i32) -> f32 {
        let (x, y) = (tile_x as f32, tile_y as f32);
        let offset = self.config.moisture_offset;
        let detail_offset = self.config.moisture_detail_offset;

        let base = self.base_noise.get_noise_2d(x + offset, y + offset);
        let detail = self.detail_noise.get_noise_2d(x + detail_offset, y + detail_offset)
            * self.config.moisture_detail_weight;
        ((base + detail) * 0.5 + 0.5).clamp(0.0, 1.0)
    }

    pub fn classify(&self, height: f32) -> Tile {
        self.config.thresholds.classify(height)
    }

    /// Tile at a world tile coordinate without going through a chunk
    pub fn tile(&self, tile_x: i32, tile_y: i32) -> Tile {
        self.classify(self.height(tile_x, tile_y))
    }

    /// Generate the tile and height grid for a chunk
    pub fn generate_chunk(&self, chunk_x: i32, chunk_y: i32) -> Chunk {
        let mut tiles = Vec::with_capacity(CHUNK_AREA);
        let mut heights = Vec::with_capacity(CHUNK_AREA);

        for local_y in 0..CHUNK_SIZE {
            for local_x in 0..CHUNK_SIZE {
                let world_x = chunk_x * CHUNK_SIZE as i32 + local_x as i32;
                let world_y = chunk_y * CHUNK_SIZE as i32 + local_y as i32;

                let height = self.height(world_x, world_y);
                tiles.push(self.classify(height));
                heights.push(height.clamp(-1.0, 1.0));
            }
        }

        log::trace!("Generated chunk ({}, {})", chunk_x, chunk_y);
        Chunk::new(chunk_x, chunk_y, tiles, heights)
    }
}
