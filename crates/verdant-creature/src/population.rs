//! Entity population and per-tick scheduling
//!
//! The population owns every entity keyed by [`EntityId`] and keeps an
//! insertion-ordered id list for deterministic iteration. A tick iterates a
//! snapshot of that list: entities removed mid-tick are skipped, entities
//! added mid-tick first update on the following tick.

use ahash::AHashMap;
use glam::Vec2;
use rand::RngCore;
use verdant_simulation::{AnimalSpecies, PlantSpecies};

use crate::animal::Animal;
use crate::entity::{Entity, Fate};
use crate::plant::Plant;
use crate::rng_trait::SimRng;
use crate::stats::LifecycleStats;
use crate::traits::TerrainAccess;
use crate::tuning::BehaviorTuning;
use crate::types::EntityId;

/// Everything an entity may touch while it updates
pub struct TickContext<'a> {
    pub dt: f32,
    /// The rest of the population; the updating entity itself is not in it
    pub population: &'a mut Population,
    pub terrain: &'a mut dyn TerrainAccess,
    pub rng: &'a mut dyn RngCore,
    pub tuning: &'a BehaviorTuning,
    pub stats: &'a mut dyn LifecycleStats,
}

/// All living entities
#[derive(Debug, Default)]
pub struct Population {
    members: AHashMap<EntityId, Entity>,
    order: Vec<EntityId>,
    next_id: u64,
    /// Entity currently taken out of `members` for its update
    in_flight: Option<EntityId>,
    in_flight_removed: bool,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a fresh id; ids are never reused
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an entity; a second add of the same id is ignored
    pub fn add(&mut self, entity: Entity) -> bool {
        let id = entity.id();
        if self.contains(id) {
            log::warn!("Ignoring duplicate add of {}", id);
            return false;
        }
        if id.raw() >= self.next_id {
            self.next_id = id.raw() + 1;
        }
        self.order.push(id);
        self.members.insert(id, entity);
        true
    }

    /// Remove an entity, returning it if it was present
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        if self.in_flight == Some(id) && !self.in_flight_removed {
            self.in_flight_removed = true;
            self.order.retain(|o| *o != id);
            return None;
        }
        let removed = self.members.remove(&id)?;
        self.order.retain(|o| *o != id);
        Some(removed)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.members.contains_key(&id)
            || (self.in_flight == Some(id) && !self.in_flight_removed)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.members.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.members.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.order.iter().filter_map(|id| self.members.get(id))
    }

    /// Entities within `radius` (inclusive) of `center`
    pub fn nearby(&self, center: Vec2, radius: f32) -> impl Iterator<Item = &Entity> + '_ {
        self.iter()
            .filter(move |e| e.position().distance(center) <= radius)
    }

    /// Place a new seedling with species defaults
    pub fn spawn_plant<R: SimRng + ?Sized>(
        &mut self,
        position: Vec2,
        species: PlantSpecies,
        rng: &mut R,
        tuning: &BehaviorTuning,
    ) -> EntityId {
        let id = self.allocate_id();
        self.add(Entity::Plant(Plant::new(id, position, species, rng, tuning)));
        id
    }

    /// Place a new adult animal with full energy
    pub fn spawn_animal<R: SimRng + ?Sized>(
        &mut self,
        position: Vec2,
        species: AnimalSpecies,
        rng: &mut R,
        tuning: &BehaviorTuning,
    ) -> EntityId {
        let id = self.allocate_id();
        self.add(Entity::Animal(Animal::new(id, position, species, rng, tuning)));
        id
    }

    /// Update every entity once
    pub fn tick<T, R, S>(
        &mut self,
        dt: f32,
        terrain: &mut T,
        rng: &mut R,
        tuning: &BehaviorTuning,
        stats: &mut S,
    ) where
        T: TerrainAccess,
        R: RngCore,
        S: LifecycleStats,
    {
        let snapshot = self.order.clone();

        for id in snapshot {
            // Removed earlier in this tick
            let Some(mut entity) = self.members.remove(&id) else {
                continue;
            };
            self.in_flight = Some(id);
            self.in_flight_removed = false;

            let fate = {
                let mut ctx = TickContext {
                    dt,
                    population: &mut *self,
                    terrain: &mut *terrain,
                    rng: &mut *rng,
                    tuning,
                    stats: &mut *stats,
                };
                entity.update(&mut ctx)
            };

            self.in_flight = None;
            // Only predators remove others; nothing removes itself and survives
            debug_assert!(
                !self.in_flight_removed || matches!(fate, Fate::Died(_)),
                "{} removed itself without a death cause",
                id
            );
            match fate {
                Fate::Alive if !self.in_flight_removed => {
                    self.members.insert(id, entity);
                }
                Fate::Alive => {
                    log::warn!("{} removed itself without a death cause", id);
                }
                Fate::Died(cause) => {
                    log::debug!("{} {} died: {}", entity.species_key(), id, cause);
                    self.order.retain(|o| *o != id);
                    stats.record_death(entity.species_key(), cause);
                }
            }
        }
    }
}
