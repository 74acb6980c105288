//! Property tests for population queries and ticking

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use verdant_creature::{BehaviorTuning, Entity, EntityId, LifecycleCounters, Population, TerrainFn};
use verdant_simulation::{AnimalSpecies, PlantSpecies, Tile};

fn species_for(i: usize) -> Result<PlantSpecies, AnimalSpecies> {
    match i % 6 {
        0 => Ok(PlantSpecies::Oak),
        1 => Ok(PlantSpecies::Pine),
        2 => Ok(PlantSpecies::Birch),
        3 => Err(AnimalSpecies::Rabbit),
        4 => Err(AnimalSpecies::Deer),
        _ => Err(AnimalSpecies::Wolf),
    }
}

fn populate(points: &[(i32, i32)], seed: u64) -> (Population, Vec<EntityId>) {
    let mut population = Population::new();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let tuning = BehaviorTuning::default();
    let ids = points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let position = Vec2::new(x as f32, y as f32);
            match species_for(i) {
                Ok(plant) => population.spawn_plant(position, plant, &mut rng, &tuning),
                Err(animal) => population.spawn_animal(position, animal, &mut rng, &tuning),
            }
        })
        .collect();
    (population, ids)
}

proptest! {
    #[test]
    fn nearby_matches_brute_force(
        points in prop::collection::vec((-200i32..200, -200i32..200), 0..60),
        cx in -200i32..200,
        cy in -200i32..200,
        radius in 0i32..150,
    ) {
        let (population, _) = populate(&points, 1);
        let center = Vec2::new(cx as f32, cy as f32);
        let radius = radius as f32;

        let found: Vec<EntityId> = population.nearby(center, radius).map(Entity::id).collect();
        let expected: Vec<EntityId> = population
            .iter()
            .filter(|e| e.position().distance(center) <= radius)
            .map(Entity::id)
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn ids_stay_unique_across_ticks(
        points in prop::collection::vec((0i32..2000, 0i32..2000), 1..40),
        seed in any::<u64>(),
    ) {
        let (mut population, _) = populate(&points, seed);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let tuning = BehaviorTuning::default();
        let mut stats = LifecycleCounters::new();
        let mut terrain = TerrainFn(|p: Vec2| {
            if p.x < 0.0 || p.y < 0.0 {
                None
            } else if (p.x as i32 / 32) % 7 == 0 {
                Some(Tile::Stone)
            } else {
                Some(Tile::Grass)
            }
        });

        for _ in 0..20 {
            population.tick(0.5, &mut terrain, &mut rng, &tuning, &mut stats);

            let mut ids: Vec<EntityId> = population.iter().map(Entity::id).collect();
            prop_assert_eq!(ids.len(), population.len());
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), population.len());

            for animal in population.iter().filter_map(Entity::as_animal) {
                prop_assert!(animal.energy.current >= 0.0);
                prop_assert!(animal.energy.current <= animal.energy.max);
            }
        }

        let initial = points.len() as u64;
        let expected = initial + stats.total_births() - stats.total_deaths();
        prop_assert_eq!(population.len() as u64, expected);
    }
}
