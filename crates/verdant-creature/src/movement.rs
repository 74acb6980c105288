//! Passability and straight-line movement helpers

use glam::Vec2;
use verdant_simulation::Tile;

use crate::rng_trait::SimRng;
use crate::traits::TerrainAccess;

/// Which tiles an animal may step onto
///
/// Stone is probabilistic and re-rolled on every check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Passability {
    pub stone_chance: f32,
}

impl Passability {
    pub fn allows<R: SimRng + ?Sized>(&self, tile: Option<Tile>, rng: &mut R) -> bool {
        match tile {
            None | Some(Tile::Water) => false,
            Some(Tile::Stone) => rng.check_probability(self.stone_chance),
            Some(Tile::Grass) | Some(Tile::Sand) => true,
        }
    }

    pub fn is_reachable<T, R>(&self, terrain: &mut T, rng: &mut R, position: Vec2) -> bool
    where
        T: TerrainAccess + ?Sized,
        R: SimRng + ?Sized,
    {
        self.allows(terrain.tile_at(position), rng)
    }
}

/// Point `distance` along the line from `from` to `to`, not overshooting `to`
///
/// Returns `from` unchanged when the two points coincide.
pub fn step_toward(from: Vec2, to: Vec2, distance: f32) -> Vec2 {
    let delta = to - from;
    let length = delta.length();
    if length <= f32::EPSILON {
        return from;
    }
    from + delta / length * distance.min(length)
}

/// Point `distance` directly away from `threat`, or along `fallback_heading`
/// when the two positions coincide
pub fn step_away(from: Vec2, threat: Vec2, distance: f32, fallback_heading: f32) -> Vec2 {
    let direction = (from - threat)
        .try_normalize()
        .unwrap_or_else(|| Vec2::from_angle(fallback_heading));
    from + direction * distance
}
