//! Traits for agent-terrain interaction
//!
//! Agents only need to know what tile lies under a position. The chunk store
//! in verdant-core implements [`TerrainAccess`]; tests can wrap a closure in
//! [`TerrainFn`].

use glam::Vec2;
use verdant_simulation::Tile;

/// Read access to the terrain under world positions
///
/// Takes `&mut self` because lookups may lazily generate chunks.
pub trait TerrainAccess {
    /// Tile at a world position, or None outside the world
    fn tile_at(&mut self, position: Vec2) -> Option<Tile>;

    /// Whether a plant may take root at this position
    fn can_root_plant_at(&mut self, position: Vec2) -> bool {
        self.tile_at(position).is_some_and(Tile::can_root_plant)
    }
}

/// Closure-backed terrain, handy for tests and tools
pub struct TerrainFn<F>(pub F);

impl<F> TerrainAccess for TerrainFn<F>
where
    F: FnMut(Vec2) -> Option<Tile>,
{
    fn tile_at(&mut self, position: Vec2) -> Option<Tile> {
        (self.0)(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooting_requires_grass() {
        let mut terrain = TerrainFn(|p: Vec2| {
            if p.x < 0.0 {
                None
            } else if p.x < 10.0 {
                Some(Tile::Grass)
            } else if p.x < 20.0 {
                Some(Tile::Sand)
            } else {
                Some(Tile::Water)
            }
        });

        assert!(terrain.can_root_plant_at(Vec2::new(5.0, 0.0)));
        assert!(!terrain.can_root_plant_at(Vec2::new(15.0, 0.0)));
        assert!(!terrain.can_root_plant_at(Vec2::new(25.0, 0.0)));
        assert!(!terrain.can_root_plant_at(Vec2::new(-5.0, 0.0)));
    }
}
