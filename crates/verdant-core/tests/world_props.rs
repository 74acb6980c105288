//! Property tests for chunk lookup and terrain determinism

use std::sync::Arc;

use glam::Vec2;
use proptest::prelude::*;
use verdant_core::simulation::{CHUNK_WORLD_SIZE, TILE_SIZE};
use verdant_core::{ChunkStore, TerrainGenerator, World};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn same_chunk_lookups_share_instance(
        x in -5000.0f32..5000.0,
        y in -5000.0f32..5000.0,
        dx in 0.0f32..1.0,
        dy in 0.0f32..1.0,
    ) {
        let mut world = World::new(TerrainGenerator::new(12), 8);
        let (chunk_pos, _, _) = ChunkStore::world_to_chunk_coords(Vec2::new(x, y));
        let origin = chunk_pos.as_vec2() * CHUNK_WORLD_SIZE;
        let other = origin + Vec2::new(dx, dy) * (CHUNK_WORLD_SIZE - 1.0);

        let a = world.chunk_at(Vec2::new(x, y));
        let tiles_before = a.tiles().to_vec();
        let b = world.chunk_at(other);
        prop_assert!(Arc::ptr_eq(&a, &b));
        prop_assert_eq!(tiles_before.as_slice(), b.tiles());
    }

    #[test]
    fn tile_lookup_matches_generator(tx in 0i32..128, ty in 0i32..128, fx in 0.0f32..1.0, fy in 0.0f32..1.0) {
        let mut world = World::new(TerrainGenerator::new(99), 8);
        let position = Vec2::new((tx as f32 + fx * 0.99) * TILE_SIZE, (ty as f32 + fy * 0.99) * TILE_SIZE);
        let expected = TerrainGenerator::new(99).tile(tx, ty);
        prop_assert_eq!(world.tile_at(position), Some(expected));
    }

    #[test]
    fn terrain_is_pure(tx in -10_000i32..10_000, ty in -10_000i32..10_000) {
        let a = TerrainGenerator::new(7);
        let b = TerrainGenerator::new(7);
        prop_assert_eq!(a.height(tx, ty), b.height(tx, ty));
        prop_assert_eq!(a.moisture(tx, ty), a.moisture(tx, ty));
    }
}
