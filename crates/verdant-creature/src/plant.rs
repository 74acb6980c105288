//! Plants: growth, seeding and mutation

use glam::Vec2;
use serde::{Deserialize, Serialize};
use verdant_simulation::{PlantSpecies, SpeciesKey};

use crate::entity::{Entity, Fate};
use crate::population::TickContext;
use crate::rng_trait::SimRng;
use crate::stats::DeathCause;
use crate::tuning::BehaviorTuning;
use crate::types::EntityId;

/// A rooted tree
///
/// Species parameters are copied onto every instance so seedlings can mutate
/// away from their species defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: EntityId,
    pub position: Vec2,
    pub age: f32,
    pub species: PlantSpecies,

    pub size: f32,
    pub max_size: f32,
    pub growth_rate: f32,
    pub seed_range: f32,
    pub seed_chance: f32,
    pub maturity_age: f32,
    pub max_age: f32,
    pub resistance: f32,
}

impl Plant {
    /// Create a seedling with the species' default parameters
    pub fn new<R: SimRng + ?Sized>(
        id: EntityId,
        position: Vec2,
        species: PlantSpecies,
        rng: &mut R,
        tuning: &BehaviorTuning,
    ) -> Self {
        let def = species.def();
        Self {
            id,
            position,
            age: 0.0,
            species,
            size: tuning.seedling_size,
            max_size: tuning.max_size_base + rng.gen_f32() * tuning.max_size_spread,
            growth_rate: def.growth_rate,
            seed_range: def.seed_range,
            seed_chance: def.seed_chance,
            maturity_age: def.maturity_age,
            max_age: def.max_age,
            resistance: def.resistance,
        }
    }

    pub fn species_key(&self) -> SpeciesKey {
        SpeciesKey::Plant(self.species)
    }

    pub fn is_fully_grown(&self) -> bool {
        self.size >= self.max_size
    }

    pub fn is_mature(&self) -> bool {
        self.is_fully_grown() && self.age > self.maturity_age
    }

    /// Scale the heritable traits by independent factors from the mutation range
    pub fn mutate<R: SimRng + ?Sized>(&mut self, rng: &mut R, tuning: &BehaviorTuning) {
        let (lo, hi) = (tuning.mutation_min, tuning.mutation_max);
        self.max_size *= rng.gen_between(lo, hi);
        self.growth_rate *= rng.gen_between(lo, hi);
        self.resistance *= rng.gen_between(lo, hi);
    }

    pub(crate) fn update(&mut self, ctx: &mut TickContext<'_>) -> Fate {
        if self.age > self.max_age {
            return Fate::Died(DeathCause::OldAge);
        }

        self.age += ctx.dt;

        if self.size < self.max_size {
            self.size = (self.size + self.growth_rate * ctx.dt).min(self.max_size);
        }

        if self.is_mature() && ctx.rng.check_probability(self.seed_chance * ctx.dt) {
            self.spread_seed(ctx);
        }

        Fate::Alive
    }

    /// Try to drop one seed of the same species within seeding range
    ///
    /// The seed is lost if the landing spot cannot host a plant.
    fn spread_seed(&self, ctx: &mut TickContext<'_>) -> Option<EntityId> {
        let angle = ctx.rng.gen_angle();
        let fraction = ctx.tuning.seed_min_fraction;
        let distance = self.seed_range * (fraction + (1.0 - fraction) * ctx.rng.gen_f32());
        let position = self.position + Vec2::from_angle(angle) * distance;

        if !ctx.terrain.can_root_plant_at(position) {
            return None;
        }

        let id = ctx.population.allocate_id();
        let mut seedling = Plant::new(id, position, self.species, &mut *ctx.rng, ctx.tuning);
        if ctx.rng.check_probability(ctx.tuning.mutation_chance) {
            seedling.mutate(&mut *ctx.rng, ctx.tuning);
            log::trace!("{} seedling {} mutated", self.species, id);
        }

        ctx.population.add(Entity::Plant(seedling));
        ctx.stats.record_birth(self.species_key());
        Some(id)
    }
}
