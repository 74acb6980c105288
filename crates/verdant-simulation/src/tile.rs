//! Tile types and constants
//!
//! Foundational types for the tile-based terrain.

use serde::{Deserialize, Serialize};

/// Size of a chunk in tiles (16x16)
pub const CHUNK_SIZE: usize = 16;

/// Total tiles in a chunk
pub const CHUNK_AREA: usize = CHUNK_SIZE * CHUNK_SIZE;

/// Edge length of one tile in world units
pub const TILE_SIZE: f32 = 32.0;

/// Edge length of one chunk in world units
pub const CHUNK_WORLD_SIZE: f32 = CHUNK_SIZE as f32 * TILE_SIZE;

/// A single terrain tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Grass,
    Water,
    Sand,
    Stone,
}

impl Tile {
    pub const ALL: [Tile; 4] = [Tile::Grass, Tile::Water, Tile::Sand, Tile::Stone];

    /// Classify a height sample with the default threshold table
    pub fn from_height(height: f32) -> Self {
        TerrainThresholds::DEFAULT.classify(height)
    }

    /// Plants can only take root on grass
    pub fn can_root_plant(self) -> bool {
        self == Tile::Grass
    }

    /// Tiles an entity may be placed on
    pub fn is_walkable(self) -> bool {
        matches!(self, Tile::Grass | Tile::Sand)
    }

    pub fn name(self) -> &'static str {
        match self {
            Tile::Grass => "grass",
            Tile::Water => "water",
            Tile::Sand => "sand",
            Tile::Stone => "stone",
        }
    }

    /// Base color (RGBA) for renderers
    pub fn color(self) -> [u8; 4] {
        match self {
            Tile::Grass => [0x44, 0xFF, 0x44, 0xFF],
            Tile::Water => [0x44, 0x44, 0xFF, 0xFF],
            Tile::Sand => [0xFF, 0xFF, 0x44, 0xFF],
            Tile::Stone => [0x88, 0x88, 0x88, 0xFF],
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Height cutoffs that partition the real line into the four tile bands.
///
/// Bands are checked in order: water, sand, stone, then grass for whatever
/// remains, so every height (including NaN) maps to exactly one tile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainThresholds {
    /// Heights strictly below this are water
    pub water_below: f32,
    /// Heights strictly below this (and not water) are sand
    pub sand_below: f32,
    /// Heights strictly above this are stone
    pub stone_above: f32,
}

impl TerrainThresholds {
    pub const DEFAULT: TerrainThresholds = TerrainThresholds {
        water_below: -0.2,
        sand_below: -0.1,
        stone_above: 0.3,
    };

    pub fn classify(&self, height: f32) -> Tile {
        if height < self.water_below {
            Tile::Water
        } else if height < self.sand_below {
            Tile::Sand
        } else if height > self.stone_above {
            Tile::Stone
        } else {
            Tile::Grass
        }
    }
}

impl Default for TerrainThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
