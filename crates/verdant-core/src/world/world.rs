//! World - the finite square terrain agents live on

use std::sync::Arc;

use glam::{IVec2, Vec2};
use verdant_creature::{SimRng, TerrainAccess};
use verdant_simulation::{CHUNK_WORLD_SIZE, Tile};

use super::chunk::Chunk;
use super::chunk_manager::ChunkStore;
use super::generation::TerrainGenerator;
use super::retention::RetentionPolicy;
use super::viewport::Viewport;

/// Chunk margin added around the viewport when selecting active chunks
const VIEWPORT_MARGIN: i32 = 1;

/// Terrain of `size_chunks x size_chunks` chunks starting at the origin
///
/// Chunk lookups work anywhere, but tile queries outside the extent
/// resolve to None so agents treat the border as impassable.
pub struct World {
    chunks: ChunkStore,
    size_chunks: i32,
}

impl World {
    pub fn new(generator: TerrainGenerator, size_chunks: i32) -> Self {
        Self::with_chunk_store(ChunkStore::new(generator), size_chunks)
    }

    pub fn with_retention(
        generator: TerrainGenerator,
        size_chunks: i32,
        retention: Box<dyn RetentionPolicy>,
    ) -> Self {
        Self::with_chunk_store(ChunkStore::with_retention(generator, retention), size_chunks)
    }

    fn with_chunk_store(chunks: ChunkStore, size_chunks: i32) -> Self {
        log::info!(
            "World created: {}x{} chunks, seed {}",
            size_chunks,
            size_chunks,
            chunks.generator().seed()
        );
        Self {
            chunks,
            size_chunks,
        }
    }

    pub fn size_chunks(&self) -> i32 {
        self.size_chunks
    }

    /// Side length of the world in world units
    pub fn extent(&self) -> f32 {
        self.size_chunks as f32 * CHUNK_WORLD_SIZE
    }

    /// Whether a world position lies inside the finite extent
    pub fn in_bounds(&self, position: Vec2) -> bool {
        let extent = self.extent();
        (0.0..extent).contains(&position.x) && (0.0..extent).contains(&position.y)
    }

    fn chunk_in_bounds(&self, pos: IVec2) -> bool {
        (0..self.size_chunks).contains(&pos.x) && (0..self.size_chunks).contains(&pos.y)
    }

    /// Chunk containing a world position, generated on first access
    pub fn chunk_at(&mut self, position: Vec2) -> Arc<Chunk> {
        let (chunk_pos, _, _) = ChunkStore::world_to_chunk_coords(position);
        self.chunks.chunk(chunk_pos)
    }

    /// Tile under a world position, None outside the world
    pub fn tile_at(&mut self, position: Vec2) -> Option<Tile> {
        if !self.in_bounds(position) {
            return None;
        }
        let (chunk_pos, local_x, local_y) = ChunkStore::world_to_chunk_coords(position);
        self.chunks.chunk(chunk_pos).tile(local_x, local_y)
    }

    /// Stored (clamped) terrain height under a world position
    pub fn height_at(&mut self, position: Vec2) -> Option<f32> {
        if !self.in_bounds(position) {
            return None;
        }
        let (chunk_pos, local_x, local_y) = ChunkStore::world_to_chunk_coords(position);
        self.chunks.chunk(chunk_pos).height(local_x, local_y)
    }

    pub fn can_root_plant_at(&mut self, position: Vec2) -> bool {
        self.tile_at(position).is_some_and(Tile::can_root_plant)
    }

    /// Chunks overlapping the viewport (plus a one-chunk margin) inside the world
    ///
    /// Recomputed from scratch on every call; the result also becomes the
    /// store's active set, which retention policies never evict.
    pub fn active_chunks_for(&mut self, viewport: &Viewport) -> Vec<Arc<Chunk>> {
        let (lo, hi) = viewport.bounds().chunk_range(VIEWPORT_MARGIN);

        let mut positions = Vec::new();
        for cy in lo.y..=hi.y {
            for cx in lo.x..=hi.x {
                let pos = IVec2::new(cx, cy);
                if self.chunk_in_bounds(pos) {
                    positions.push(pos);
                }
            }
        }

        self.chunks.set_active(positions.clone());
        positions.into_iter().map(|pos| self.chunks.chunk(pos)).collect()
    }

    /// Uniformly random position inside the world
    pub fn random_position<R: SimRng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let extent = self.extent();
        Vec2::new(rng.gen_f32() * extent, rng.gen_f32() * extent)
    }

    pub fn chunk_store(&self) -> &ChunkStore {
        &self.chunks
    }

    pub fn generator(&self) -> &TerrainGenerator {
        self.chunks.generator()
    }
}

impl TerrainAccess for World {
    fn tile_at(&mut self, position: Vec2) -> Option<Tile> {
        World::tile_at(self, position)
    }

    fn can_root_plant_at(&mut self, position: Vec2) -> bool {
        World::can_root_plant_at(self, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_simulation::TILE_SIZE;

    fn world() -> World {
        World::new(TerrainGenerator::new(31337), 4)
    }

    #[test]
    fn test_out_of_extent_is_absent() {
        let mut world = world();
        assert_eq!(world.tile_at(Vec2::new(-1.0, 10.0)), None);
        assert_eq!(world.tile_at(Vec2::new(10.0, 2048.0)), None);
        assert!(!world.can_root_plant_at(Vec2::new(5000.0, 5000.0)));
        assert!(world.tile_at(Vec2::new(0.0, 0.0)).is_some());
        assert!(world.tile_at(Vec2::new(2047.9, 2047.9)).is_some());
    }

    #[test]
    fn test_chunk_at_is_unbounded_and_identity_stable() {
        let mut world = world();
        let a = world.chunk_at(Vec2::new(-700.0, 9000.0));
        let b = world.chunk_at(Vec2::new(-600.0, 9100.0));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.position(), IVec2::new(-2, 17));
    }

    #[test]
    fn test_tile_lookup_matches_generator() {
        let mut world = world();
        for (tx, ty) in [(0, 0), (5, 9), (17, 33), (63, 63)] {
            let pos = Vec2::new(tx as f32 * TILE_SIZE + 3.0, ty as f32 * TILE_SIZE + 30.0);
            let expected = world.generator().tile(tx, ty);
            assert_eq!(world.tile_at(pos), Some(expected));
        }
    }

    #[test]
    fn test_rooting_only_on_grass() {
        let mut world = world();
        for ty in 0..64 {
            for tx in 0..64 {
                let pos = Vec2::new(tx as f32, ty as f32) * TILE_SIZE;
                let tile = world.tile_at(pos);
                assert_eq!(world.can_root_plant_at(pos), tile == Some(Tile::Grass));
            }
        }
    }

    #[test]
    fn test_active_chunks_clipped_to_extent() {
        let mut world = world();
        let viewport = Viewport::new(Vec2::ZERO, 512.0, 512.0, 1.0);
        let chunks = world.active_chunks_for(&viewport);
        let positions: Vec<IVec2> = chunks.iter().map(|c| c.position()).collect();
        assert_eq!(
            positions,
            vec![
                IVec2::new(0, 0),
                IVec2::new(1, 0),
                IVec2::new(0, 1),
                IVec2::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_active_chunks_recomputed_each_call() {
        let mut world = World::new(TerrainGenerator::new(1), 64);
        let near = Viewport::new(Vec2::new(1000.0, 1000.0), 512.0, 512.0, 1.0);
        assert_eq!(world.active_chunks_for(&near).len(), 16);

        let far = Viewport::new(Vec2::new(20_000.0, 20_000.0), 512.0, 512.0, 1.0);
        let chunks = world.active_chunks_for(&far);
        assert_eq!(chunks.len(), 16);
        assert!(chunks.iter().all(|c| c.x >= 37 && c.y >= 37));
        assert_eq!(world.chunk_store().active_chunk_positions().len(), 16);
    }
}
