//! Terrain and species data for Verdant
//!
//! This crate provides the foundational data types for the ecosystem:
//! - Terrain tiles and the height classification table (Tile, TerrainThresholds)
//! - Tile/chunk sizing constants (TILE_SIZE, CHUNK_SIZE, CHUNK_AREA)
//! - Static species tables (AnimalSpecies, PlantSpecies and their defs)

mod species;
mod tile;

pub use species::{
    AnimalSpecies, AnimalSpeciesDef, Diet, PlantKind, PlantSpecies, PlantSpeciesDef, SpeciesKey,
};
pub use tile::{CHUNK_AREA, CHUNK_SIZE, CHUNK_WORLD_SIZE, TILE_SIZE, TerrainThresholds, Tile};
