//! Ecosystem - the top-level simulation driver
//!
//! Owns the world, the population, the environment and the RNG. `tick` is
//! the only mutation entry point besides placement commands.

use std::sync::Arc;

use glam::Vec2;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use verdant_creature::{
    Entity, EntityId, LifecycleCounters, LifecycleStats, Population, SimRng,
};
use verdant_simulation::{PlantSpecies, SpeciesKey, Tile};

use super::census::Census;
use super::config::{ConfigError, EcosystemConfig};
use super::environment::Environment;
use super::spawner::{AmbientSpawner, PlacementKind};
use crate::world::{Chunk, LoadedChunkLimit, TerrainGenerator, Viewport, World};

/// Zoom of the initial camera, in pixels per world unit
const INITIAL_ZOOM: f32 = 0.5;

/// Where a placement may land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlacementRule {
    /// Anything but Water or Stone (user placement)
    NotBlocked,
    /// Trees need rootable ground (seeding and ambient spawns)
    Strict,
}

pub struct Ecosystem {
    config: EcosystemConfig,
    seed: u64,
    world: World,
    population: Population,
    rng: Xoshiro256PlusPlus,
    environment: Environment,
    spawner: AmbientSpawner,
    counters: LifecycleCounters,
    census: Census,
    /// Simulated seconds since creation
    elapsed: f64,
    ticks: u64,
}

impl Ecosystem {
    /// Build an empty ecosystem; call [`Ecosystem::seed_initial_population`] to populate it
    pub fn new(config: EcosystemConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                log::info!("No seed configured, using random seed {}", seed);
                seed
            }
        };

        let generator = TerrainGenerator::from_config(seed, config.terrain.clone());
        let world = match config.world.max_loaded_chunks {
            Some(max_loaded) => World::with_retention(
                generator,
                config.world.size_chunks,
                Box::new(LoadedChunkLimit::new(max_loaded)),
            ),
            None => World::new(generator, config.world.size_chunks),
        };

        log::info!("Ecosystem created with seed {}", seed);

        Ok(Self {
            seed,
            world,
            population: Population::new(),
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            environment: Environment::new(config.environment.clone()),
            spawner: AmbientSpawner::new(config.spawning.clone()),
            counters: LifecycleCounters::new(),
            census: Census::default(),
            elapsed: 0.0,
            ticks: 0,
            config,
        })
    }

    /// Build and populate with the configured initial counts
    pub fn with_initial_population(config: EcosystemConfig) -> Result<Self, ConfigError> {
        let mut ecosystem = Self::new(config)?;
        ecosystem.seed_initial_population();
        Ok(ecosystem)
    }

    /// Scatter the configured initial trees and animals over the world
    ///
    /// Trees are attempted at random positions and kept only where a plant
    /// can root; animals are only placed on walkable ground.
    pub fn seed_initial_population(&mut self) {
        let spawning = self.config.spawning.clone();
        let mut placed = 0;

        for kind in PlacementKind::ALL {
            let attempts = spawning.initial_count(kind);
            let mut kept = 0;
            for _ in 0..attempts {
                let position = self.world.random_position(&mut self.rng);
                if self.spawn(kind, position, PlacementRule::Strict).is_some() {
                    kept += 1;
                }
            }
            log::debug!("Initial {:?}: {}/{} placed", kind, kept, attempts);
            placed += kept;
        }

        self.refresh_census();
        log::info!(
            "Seeded initial population: {} entities ({} plants, {} animals)",
            placed,
            self.census.plants,
            self.census.animals
        );
    }

    /// Place an entity on user request
    ///
    /// Rejected (None) when the target tile is Water, Stone or outside the
    /// world. Trees get a random species.
    pub fn place(&mut self, kind: PlacementKind, position: Vec2) -> Option<EntityId> {
        let id = self.spawn(kind, position, PlacementRule::NotBlocked);
        if id.is_some() {
            self.refresh_census();
        }
        id
    }

    fn spawn(&mut self, kind: PlacementKind, position: Vec2, rule: PlacementRule) -> Option<EntityId> {
        let tile = self.world.tile_at(position);
        let allowed = match (kind, rule) {
            (PlacementKind::Tree, PlacementRule::Strict) => tile.is_some_and(Tile::can_root_plant),
            _ => tile.is_some_and(Tile::is_walkable),
        };
        if !allowed {
            log::debug!(
                "Rejected {:?} placement at ({:.1}, {:.1}) on {:?}",
                kind,
                position.x,
                position.y,
                tile
            );
            return None;
        }

        let tuning = &self.config.behavior;
        let (id, species) = match kind.animal_species() {
            Some(species) => {
                let id = self
                    .population
                    .spawn_animal(position, species, &mut self.rng, tuning);
                (id, SpeciesKey::Animal(species))
            }
            None => {
                let index = (self.rng.gen_f32() * PlantSpecies::ALL.len() as f32) as usize;
                let species = PlantSpecies::ALL[index.min(PlantSpecies::ALL.len() - 1)];
                let id = self
                    .population
                    .spawn_plant(position, species, &mut self.rng, tuning);
                (id, SpeciesKey::Plant(species))
            }
        };

        self.counters.record_birth(species);
        log::debug!(
            "Placed {} {} at ({:.1}, {:.1})",
            species,
            id,
            position.x,
            position.y
        );
        Some(id)
    }

    /// Advance the simulation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.environment.update(dt, &mut self.rng);

        self.population.tick(
            dt,
            &mut self.world,
            &mut self.rng,
            &self.config.behavior,
            &mut self.counters,
        );

        for kind in self.spawner.update(dt, &mut self.rng) {
            let position = self.world.random_position(&mut self.rng);
            self.spawn(kind, position, PlacementRule::Strict);
        }

        self.refresh_census();
        self.elapsed += dt as f64;
        self.ticks += 1;
        log::trace!("Tick {} done: {}", self.ticks, self.census);
    }

    fn refresh_census(&mut self) {
        self.census = Census::from_population(&self.population);
    }

    /// Every live entity, for drawing; no viewport culling is applied
    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.population.iter()
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.population.get(id)
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn census(&self) -> &Census {
        &self.census
    }

    pub fn counters(&self) -> &LifecycleCounters {
        &self.counters
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Terrain chunks to draw for a viewport
    pub fn active_chunks_for(&mut self, viewport: &Viewport) -> Vec<Arc<Chunk>> {
        self.world.active_chunks_for(viewport)
    }

    /// Camera centered on the world at the default zoom
    pub fn initial_viewport(&self, width: f32, height: f32) -> Viewport {
        let half = self.world.extent() * 0.5;
        Viewport::new(Vec2::splat(half), width, height, INITIAL_ZOOM)
    }

    pub fn config(&self) -> &EcosystemConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_simulation::{AnimalSpecies, TerrainThresholds};

    fn config_with(thresholds: TerrainThresholds) -> EcosystemConfig {
        let mut config = EcosystemConfig::with_seed(11);
        config.world.size_chunks = 2;
        config.terrain.thresholds = thresholds;
        config.spawning.enabled = false;
        config
    }

    /// Every height maps to the same tile
    fn uniform(tile: Tile) -> TerrainThresholds {
        let (water_below, sand_below, stone_above) = match tile {
            Tile::Water => (100.0, 100.0, 100.0),
            Tile::Sand => (-100.0, 100.0, 100.0),
            Tile::Grass => (-100.0, -100.0, 100.0),
            Tile::Stone => (-100.0, -100.0, -100.0),
        };
        TerrainThresholds {
            water_below,
            sand_below,
            stone_above,
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = EcosystemConfig::with_seed(1);
        config.world.size_chunks = -3;
        assert!(Ecosystem::new(config).is_err());
    }

    #[test]
    fn test_place_rejects_water_and_stone() {
        for tile in [Tile::Water, Tile::Stone] {
            let mut eco = Ecosystem::new(config_with(uniform(tile))).unwrap();
            for kind in PlacementKind::ALL {
                assert_eq!(eco.place(kind, Vec2::new(100.0, 100.0)), None);
            }
            assert!(eco.population().is_empty());
        }
    }

    #[test]
    fn test_place_allows_tree_on_sand() {
        let mut eco = Ecosystem::new(config_with(uniform(Tile::Sand))).unwrap();
        let id = eco.place(PlacementKind::Tree, Vec2::new(100.0, 100.0)).unwrap();
        assert!(eco.entity(id).is_some_and(Entity::is_plant));
        assert_eq!(eco.census().plants, 1);
    }

    #[test]
    fn test_place_outside_world_rejected() {
        let mut eco = Ecosystem::new(config_with(uniform(Tile::Grass))).unwrap();
        assert_eq!(eco.place(PlacementKind::Wolf, Vec2::new(-5.0, 10.0)), None);
        assert_eq!(eco.place(PlacementKind::Wolf, Vec2::new(1024.0, 10.0)), None);
        assert!(eco.place(PlacementKind::Wolf, Vec2::new(1023.0, 10.0)).is_some());
    }

    #[test]
    fn test_initial_population_on_grass() {
        let mut config = config_with(uniform(Tile::Grass));
        config.spawning.initial_trees = 20;
        config.spawning.initial_rabbits = 5;
        config.spawning.initial_deer = 3;
        config.spawning.initial_wolves = 1;
        let eco = Ecosystem::with_initial_population(config).unwrap();

        assert_eq!(eco.census().plants, 20);
        assert_eq!(eco.census().count(SpeciesKey::Animal(AnimalSpecies::Rabbit)), 5);
        assert_eq!(eco.census().count(SpeciesKey::Animal(AnimalSpecies::Deer)), 3);
        assert_eq!(eco.census().count(SpeciesKey::Animal(AnimalSpecies::Wolf)), 1);
        assert_eq!(eco.counters().total_births(), 29);
        assert!(eco.entities().all(|e| eco.world().in_bounds(e.position())));
    }

    #[test]
    fn test_initial_trees_skip_sand() {
        let mut config = config_with(uniform(Tile::Sand));
        config.spawning.initial_trees = 20;
        config.spawning.initial_rabbits = 4;
        let eco = Ecosystem::with_initial_population(config).unwrap();
        assert_eq!(eco.census().plants, 0);
        assert_eq!(eco.census().animals, 4 + 30 + 10);
    }

    #[test]
    fn test_same_seed_same_population() {
        let build = || {
            let mut config = EcosystemConfig::with_seed(99);
            config.world.size_chunks = 4;
            Ecosystem::with_initial_population(config).unwrap()
        };
        let a = build();
        let b = build();
        let positions = |eco: &Ecosystem| eco.entities().map(|e| e.position()).collect::<Vec<_>>();
        assert_eq!(positions(&a), positions(&b));
    }

    #[test]
    fn test_tick_advances_clock_and_environment() {
        let mut eco = Ecosystem::new(config_with(uniform(Tile::Grass))).unwrap();
        eco.tick(0.5);
        eco.tick(0.5);
        assert_eq!(eco.tick_count(), 2);
        assert!((eco.elapsed() - 1.0).abs() < 1e-9);
        assert!((eco.environment().elapsed - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_ambient_spawner_places_after_interval() {
        let mut config = config_with(uniform(Tile::Grass));
        config.spawning.enabled = true;
        config.spawning.tree_chance = 1.0;
        config.spawning.rabbit_chance = 0.0;
        config.spawning.deer_chance = 0.0;
        config.spawning.wolf_chance = 0.0;
        let mut eco = Ecosystem::new(config).unwrap();

        for _ in 0..4 {
            eco.tick(1.0);
        }
        assert_eq!(eco.census().plants, 0);
        eco.tick(1.0);
        assert_eq!(eco.census().plants, 1);
    }

    #[test]
    fn test_census_tracks_deaths() {
        let mut eco = Ecosystem::new(config_with(uniform(Tile::Grass))).unwrap();
        let id = eco.place(PlacementKind::Rabbit, Vec2::new(500.0, 500.0)).unwrap();
        // Rabbits die of old age at 60 s
        for _ in 0..61 {
            eco.tick(1.0);
        }
        assert!(eco.entity(id).is_none());
        assert_eq!(eco.census().animals, 0);
        assert_eq!(eco.counters().total_deaths(), 1);
    }

    #[test]
    fn test_initial_viewport_centered() {
        let mut eco = Ecosystem::new(config_with(uniform(Tile::Grass))).unwrap();
        let viewport = eco.initial_viewport(800.0, 600.0);
        assert_eq!(viewport.center, Vec2::splat(512.0));
        assert_eq!(viewport.zoom, 0.5);
        // 1600x1200 world units plus margin covers the whole 2x2 world
        assert_eq!(eco.active_chunks_for(&viewport).len(), 4);
    }

    #[test]
    fn test_chunk_cap_applies() {
        let mut config = config_with(uniform(Tile::Grass));
        config.world.size_chunks = 16;
        config.world.max_loaded_chunks = Some(4);
        let mut eco = Ecosystem::new(config).unwrap();
        for i in 0..10 {
            eco.world_mut().tile_at(Vec2::new(i as f32 * 512.0 + 1.0, 1.0));
        }
        assert_eq!(eco.world().chunk_store().loaded_count(), 4);
    }
}
