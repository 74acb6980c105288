//! Animals: vitals, mortality and the per-tick update

use glam::Vec2;
use serde::{Deserialize, Serialize};
use verdant_simulation::{AnimalSpecies, AnimalSpeciesDef, SpeciesKey, TILE_SIZE, Tile};

use crate::behavior::BehaviorState;
use crate::entity::Fate;
use crate::population::{Population, TickContext};
use crate::rng_trait::SimRng;
use crate::stats::DeathCause;
use crate::tuning::BehaviorTuning;
use crate::types::{Energy, EntityId};

/// A mobile herbivore or carnivore
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub id: EntityId,
    pub position: Vec2,
    pub age: f32,
    pub species: AnimalSpecies,
    pub energy: Energy,
    pub state: BehaviorState,

    /// Prey being hunted or predator being fled from
    pub target: Option<EntityId>,
    /// Cached tree a herbivore stays leashed to
    pub nearest_tree: Option<EntityId>,

    /// Wander direction in radians
    pub heading: f32,
    pub facing_right: bool,

    pub hunt_timer: f32,
    /// Rest time remaining
    pub rest_timer: f32,
    pub time_in_water: f32,
    pub time_since_kill: f32,
}

impl Animal {
    pub fn new<R: SimRng + ?Sized>(
        id: EntityId,
        position: Vec2,
        species: AnimalSpecies,
        rng: &mut R,
        tuning: &BehaviorTuning,
    ) -> Self {
        Self {
            id,
            position,
            age: 0.0,
            species,
            energy: Energy::new(tuning.max_energy),
            state: BehaviorState::Wandering,
            target: None,
            nearest_tree: None,
            heading: rng.gen_angle(),
            facing_right: true,
            hunt_timer: 0.0,
            rest_timer: 0.0,
            time_in_water: 0.0,
            time_since_kill: 0.0,
        }
    }

    pub fn def(&self) -> &'static AnimalSpeciesDef {
        self.species.def()
    }

    pub fn species_key(&self) -> SpeciesKey {
        SpeciesKey::Animal(self.species)
    }

    /// Walking speed in world units per second
    pub fn base_speed(&self) -> f32 {
        self.def().speed * TILE_SIZE
    }

    /// Maximum distance a herbivore strays from its tree, in world units
    pub fn leash_radius(&self) -> f32 {
        self.def().leash_radius_tiles * TILE_SIZE
    }

    /// Position of the current target if it is still in the population
    pub fn target_position(&self, population: &Population) -> Option<Vec2> {
        self.target
            .and_then(|id| population.get(id))
            .and_then(|e| e.as_animal())
            .map(|a| a.position)
    }

    /// Position of the cached tree if it is still in the population
    pub fn tree_position(&self, population: &Population) -> Option<Vec2> {
        self.nearest_tree
            .and_then(|id| population.get(id))
            .and_then(|e| e.as_plant())
            .map(|p| p.position)
    }

    pub(crate) fn update(&mut self, ctx: &mut TickContext<'_>) -> Fate {
        if let Some(cause) = self.update_vitals(ctx) {
            return Fate::Died(cause);
        }
        if let Some(cause) = self.mortality() {
            return Fate::Died(cause);
        }

        self.decide(ctx);
        self.act(ctx);

        if self.state != BehaviorState::Resting
            && self.energy.current < ctx.tuning.exhaustion_threshold
        {
            self.start_resting(ctx.tuning);
        }

        Fate::Alive
    }

    /// Age, drain energy and track environmental death timers
    fn update_vitals(&mut self, ctx: &mut TickContext<'_>) -> Option<DeathCause> {
        let dt = ctx.dt;
        self.age += dt;
        self.energy.drain(ctx.tuning.energy_drain_per_sec * dt);

        if ctx.terrain.tile_at(self.position) == Some(Tile::Water) {
            self.time_in_water += dt;
            if self.time_in_water >= ctx.tuning.submersion_limit {
                return Some(DeathCause::Drowned);
            }
        } else {
            self.time_in_water = 0.0;
        }

        if self.species.is_carnivore() {
            self.time_since_kill += dt;
            if self.time_since_kill >= ctx.tuning.starvation_limit {
                return Some(DeathCause::Starved);
            }
        }

        None
    }

    fn mortality(&self) -> Option<DeathCause> {
        if self.age >= self.def().max_age {
            Some(DeathCause::OldAge)
        } else if self.energy.is_depleted() {
            Some(DeathCause::Exhaustion)
        } else {
            None
        }
    }

    pub(crate) fn start_resting(&mut self, tuning: &BehaviorTuning) {
        self.state = BehaviorState::Resting;
        self.rest_timer = tuning.rest_duration;
        self.target = None;
    }

    /// Move to `next`, turning to face the direction of travel
    pub(crate) fn move_to(&mut self, next: Vec2) {
        let dx = next.x - self.position.x;
        if dx > 0.0 {
            self.facing_right = true;
        } else if dx < 0.0 {
            self.facing_right = false;
        }
        self.position = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::stats::LifecycleCounters;
    use crate::traits::TerrainFn;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::cell::Cell;

    fn setup() -> (Population, Xoshiro256PlusPlus, BehaviorTuning, LifecycleCounters) {
        (
            Population::new(),
            Xoshiro256PlusPlus::seed_from_u64(1234),
            BehaviorTuning::default(),
            LifecycleCounters::new(),
        )
    }

    #[test]
    fn test_new_animal_defaults() {
        let (_, mut rng, tuning, _) = setup();
        let deer = Animal::new(EntityId::from_raw(3), Vec2::ONE, AnimalSpecies::Deer, &mut rng, &tuning);
        assert_eq!(deer.state, BehaviorState::Wandering);
        assert_eq!(deer.energy.current, 100.0);
        assert_eq!(deer.base_speed(), 3.5 * 32.0);
        assert_eq!(deer.leash_radius(), 50.0 * 32.0);
        assert!(deer.target.is_none());
    }

    #[test]
    fn test_old_age_boundary() {
        let (mut population, mut rng, tuning, mut stats) = setup();
        let id = population.spawn_animal(Vec2::new(100.0, 100.0), AnimalSpecies::Rabbit, &mut rng, &tuning);
        population
            .get_mut(id)
            .and_then(Entity::as_animal_mut)
            .expect("rabbit")
            .age = 59.5;

        let mut terrain = TerrainFn(|_| Some(Tile::Grass));
        population.tick(0.25, &mut terrain, &mut rng, &tuning, &mut stats);
        assert!(population.contains(id), "59.75 is still below max age");

        population.tick(0.25, &mut terrain, &mut rng, &tuning, &mut stats);
        assert!(!population.contains(id));
        assert_eq!(stats.deaths_by(DeathCause::OldAge), 1);
    }

    #[test]
    fn test_zero_energy_dies_regardless_of_age() {
        let (mut population, mut rng, tuning, mut stats) = setup();
        let id = population.spawn_animal(Vec2::ZERO, AnimalSpecies::Deer, &mut rng, &tuning);
        population
            .get_mut(id)
            .and_then(Entity::as_animal_mut)
            .expect("deer")
            .energy
            .set(0.0);

        let mut terrain = TerrainFn(|_| Some(Tile::Grass));
        population.tick(0.01, &mut terrain, &mut rng, &tuning, &mut stats);
        assert!(!population.contains(id));
        assert_eq!(stats.deaths_by(DeathCause::Exhaustion), 1);
    }

    #[test]
    fn test_drowns_after_accumulated_submersion() {
        let (mut population, mut rng, tuning, mut stats) = setup();
        let id = population.spawn_animal(Vec2::ZERO, AnimalSpecies::Rabbit, &mut rng, &tuning);

        let mut terrain = TerrainFn(|_| Some(Tile::Water));
        for dt in [0.5, 1.5, 2.75] {
            population.tick(dt, &mut terrain, &mut rng, &tuning, &mut stats);
            assert!(population.contains(id));
        }
        population.tick(0.25, &mut terrain, &mut rng, &tuning, &mut stats);
        assert!(!population.contains(id));
        assert_eq!(stats.deaths_by(DeathCause::Drowned), 1);
    }

    #[test]
    fn test_leaving_water_resets_submersion() {
        let (mut population, mut rng, tuning, mut stats) = setup();
        let id = population.spawn_animal(Vec2::ZERO, AnimalSpecies::Rabbit, &mut rng, &tuning);

        let flooded = Cell::new(true);
        let mut terrain = TerrainFn(|_| {
            if flooded.get() {
                Some(Tile::Water)
            } else {
                Some(Tile::Grass)
            }
        });

        for _ in 0..4 {
            population.tick(1.0, &mut terrain, &mut rng, &tuning, &mut stats);
        }
        flooded.set(false);
        population.tick(0.1, &mut terrain, &mut rng, &tuning, &mut stats);
        let rabbit = population.get(id).and_then(Entity::as_animal).expect("rabbit");
        assert_eq!(rabbit.time_in_water, 0.0);

        flooded.set(true);
        for _ in 0..4 {
            population.tick(1.0, &mut terrain, &mut rng, &tuning, &mut stats);
        }
        assert!(population.contains(id));
    }

    #[test]
    fn test_wolf_starves_without_kills() {
        let (mut population, mut rng, tuning, mut stats) = setup();
        let id = population.spawn_animal(Vec2::ZERO, AnimalSpecies::Wolf, &mut rng, &tuning);

        let mut terrain = TerrainFn(|_| Some(Tile::Grass));
        for _ in 0..14 {
            population.tick(1.0, &mut terrain, &mut rng, &tuning, &mut stats);
        }
        assert!(population.contains(id));
        population.tick(1.0, &mut terrain, &mut rng, &tuning, &mut stats);
        assert!(!population.contains(id));
        assert_eq!(stats.deaths_by(DeathCause::Starved), 1);
    }

    #[test]
    fn test_herbivores_never_starve() {
        let (mut population, mut rng, tuning, mut stats) = setup();
        let id = population.spawn_animal(Vec2::ZERO, AnimalSpecies::Deer, &mut rng, &tuning);

        let mut terrain = TerrainFn(|_| Some(Tile::Grass));
        for _ in 0..30 {
            population.tick(1.0, &mut terrain, &mut rng, &tuning, &mut stats);
        }
        assert!(population.contains(id));
    }

    #[test]
    fn test_move_to_updates_facing() {
        let (_, mut rng, tuning, _) = setup();
        let mut rabbit = Animal::new(EntityId::from_raw(1), Vec2::ZERO, AnimalSpecies::Rabbit, &mut rng, &tuning);
        rabbit.move_to(Vec2::new(-1.0, 0.0));
        assert!(!rabbit.facing_right);
        rabbit.move_to(Vec2::new(-1.0, 5.0));
        assert!(!rabbit.facing_right);
        rabbit.move_to(Vec2::new(2.0, 5.0));
        assert!(rabbit.facing_right);
    }
}
