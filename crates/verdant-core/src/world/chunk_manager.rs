//! Chunk lifecycle management - lazy generation, retention and active chunk tracking

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use glam::{IVec2, Vec2};
use verdant_simulation::{CHUNK_SIZE, TILE_SIZE};

use super::chunk::Chunk;
use super::generation::TerrainGenerator;
use super::retention::{RetainAll, RetentionPolicy};

/// Memoized chunk storage keyed by chunk coordinates
///
/// Chunks are generated on first lookup and shared as `Arc`s, so repeated
/// lookups of the same coordinates hand out the same instance.
pub struct ChunkStore {
    generator: TerrainGenerator,
    chunks: AHashMap<IVec2, Arc<Chunk>>,
    /// Loaded chunk positions, oldest generation first
    generation_order: Vec<IVec2>,

    /// Chunks overlapping the last viewport query
    active_chunks: Vec<IVec2>,
    active_set: AHashSet<IVec2>,

    retention: Box<dyn RetentionPolicy>,
}

impl ChunkStore {
    /// Create a store that never evicts
    pub fn new(generator: TerrainGenerator) -> Self {
        Self::with_retention(generator, Box::new(RetainAll))
    }

    pub fn with_retention(generator: TerrainGenerator, retention: Box<dyn RetentionPolicy>) -> Self {
        log::debug!("Chunk store using {} retention", retention.name());
        Self {
            generator,
            chunks: AHashMap::new(),
            generation_order: Vec::new(),
            active_chunks: Vec::new(),
            active_set: AHashSet::new(),
            retention,
        }
    }

    /// Convert a world position to chunk coordinates + local tile offset
    pub fn world_to_chunk_coords(position: Vec2) -> (IVec2, usize, usize) {
        let tile_x = (position.x / TILE_SIZE).floor() as i32;
        let tile_y = (position.y / TILE_SIZE).floor() as i32;
        let chunk_x = tile_x.div_euclid(CHUNK_SIZE as i32);
        let chunk_y = tile_y.div_euclid(CHUNK_SIZE as i32);
        let local_x = tile_x.rem_euclid(CHUNK_SIZE as i32) as usize;
        let local_y = tile_y.rem_euclid(CHUNK_SIZE as i32) as usize;
        (IVec2::new(chunk_x, chunk_y), local_x, local_y)
    }

    /// Chunk at chunk coordinates, generating it on a miss
    pub fn chunk(&mut self, pos: IVec2) -> Arc<Chunk> {
        if let Some(chunk) = self.chunks.get(&pos) {
            return Arc::clone(chunk);
        }

        let chunk = Arc::new(self.generator.generate_chunk(pos.x, pos.y));
        self.chunks.insert(pos, Arc::clone(&chunk));
        self.generation_order.push(pos);
        log::debug!(
            "Generated chunk ({}, {}), {} loaded",
            pos.x,
            pos.y,
            self.chunks.len()
        );

        self.apply_retention(pos);
        chunk
    }

    fn apply_retention(&mut self, newest: IVec2) {
        let mut protected = self.active_set.clone();
        protected.insert(newest);

        let evicted = self.retention.evictions(&self.generation_order, &protected);
        if evicted.is_empty() {
            return;
        }

        for pos in &evicted {
            self.chunks.remove(pos);
        }
        let evicted: AHashSet<IVec2> = evicted.into_iter().collect();
        self.generation_order.retain(|pos| !evicted.contains(pos));
        log::debug!(
            "Evicted {} chunks, {} remain loaded",
            evicted.len(),
            self.chunks.len()
        );
    }

    /// Get an already loaded chunk without generating
    pub fn get(&self, pos: IVec2) -> Option<&Arc<Chunk>> {
        self.chunks.get(&pos)
    }

    pub fn is_loaded(&self, pos: IVec2) -> bool {
        self.chunks.contains_key(&pos)
    }

    pub fn loaded_count(&self) -> usize {
        self.chunks.len()
    }

    /// Replace the active chunk set
    pub fn set_active(&mut self, positions: Vec<IVec2>) {
        self.active_set = positions.iter().copied().collect();
        self.active_chunks = positions;
    }

    /// Get positions of active chunks
    pub fn active_chunk_positions(&self) -> &[IVec2] {
        &self.active_chunks
    }

    pub fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }
}
