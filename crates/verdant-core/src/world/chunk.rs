//! Chunk - a 16x16 block of generated terrain tiles

use glam::{IVec2, Vec2};
use verdant_simulation::{CHUNK_AREA, CHUNK_SIZE, CHUNK_WORLD_SIZE, Tile};

/// Generated terrain for one chunk
///
/// Chunks never change after generation. `x`/`y` are chunk coordinates;
/// tile `(lx, ly)` covers world tile `(x * CHUNK_SIZE + lx, y * CHUNK_SIZE + ly)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub x: i32,
    pub y: i32,
    tiles: Vec<Tile>,
    /// Height per tile, clamped to [-1, 1], for shading
    heights: Vec<f32>,
}

impl Chunk {
    pub(crate) fn new(x: i32, y: i32, tiles: Vec<Tile>, heights: Vec<f32>) -> Self {
        debug_assert_eq!(tiles.len(), CHUNK_AREA);
        debug_assert_eq!(heights.len(), CHUNK_AREA);
        Self { x, y, tiles, heights }
    }

    #[inline]
    fn index(local_x: usize, local_y: usize) -> Option<usize> {
        if local_x < CHUNK_SIZE && local_y < CHUNK_SIZE {
            Some(local_y * CHUNK_SIZE + local_x)
        } else {
            None
        }
    }

    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// World-space position of the chunk's top-left corner
    pub fn world_origin(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32) * CHUNK_WORLD_SIZE
    }

    /// Tile at local coordinates, None outside the chunk
    pub fn tile(&self, local_x: usize, local_y: usize) -> Option<Tile> {
        Self::index(local_x, local_y).map(|i| self.tiles[i])
    }

    pub fn height(&self, local_x: usize, local_y: usize) -> Option<f32> {
        Self::index(local_x, local_y).map(|i| self.heights[i])
    }

    /// Row-major tile grid
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn striped() -> Chunk {
        let tiles = (0..CHUNK_AREA)
            .map(|i| if i % CHUNK_SIZE < 8 { Tile::Grass } else { Tile::Water })
            .collect();
        let heights = (0..CHUNK_AREA)
            .map(|i| if i % CHUNK_SIZE < 8 { 0.0 } else { -0.5 })
            .collect();
        Chunk::new(2, -1, tiles, heights)
    }

    #[test]
    fn test_local_lookup() {
        let chunk = striped();
        assert_eq!(chunk.tile(0, 0), Some(Tile::Grass));
        assert_eq!(chunk.tile(15, 3), Some(Tile::Water));
        assert_eq!(chunk.height(15, 3), Some(-0.5));
        assert_eq!(chunk.tile(16, 0), None);
        assert_eq!(chunk.height(0, 16), None);
    }

    #[test]
    fn test_origin_and_counts() {
        let chunk = striped();
        assert_eq!(chunk.position(), IVec2::new(2, -1));
        assert_eq!(chunk.world_origin(), Vec2::new(1024.0, -512.0));
        assert_eq!(chunk.count(Tile::Grass), CHUNK_AREA / 2);
        assert_eq!(chunk.count(Tile::Stone), 0);
    }
}
