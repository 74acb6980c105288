//! The entity sum type shared by plants and animals

use glam::Vec2;
use serde::{Deserialize, Serialize};
use verdant_simulation::SpeciesKey;

use crate::animal::Animal;
use crate::plant::Plant;
use crate::population::TickContext;
use crate::stats::DeathCause;
use crate::types::EntityId;

/// Outcome of a single entity update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    Alive,
    Died(DeathCause),
}

/// Any living thing in the ecosystem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Entity {
    Plant(Plant),
    Animal(Animal),
}

impl Entity {
    pub fn id(&self) -> EntityId {
        match self {
            Entity::Plant(p) => p.id,
            Entity::Animal(a) => a.id,
        }
    }

    pub fn position(&self) -> Vec2 {
        match self {
            Entity::Plant(p) => p.position,
            Entity::Animal(a) => a.position,
        }
    }

    pub fn age(&self) -> f32 {
        match self {
            Entity::Plant(p) => p.age,
            Entity::Animal(a) => a.age,
        }
    }

    pub fn species_key(&self) -> SpeciesKey {
        match self {
            Entity::Plant(p) => p.species_key(),
            Entity::Animal(a) => a.species_key(),
        }
    }

    pub fn is_plant(&self) -> bool {
        matches!(self, Entity::Plant(_))
    }

    pub fn as_plant(&self) -> Option<&Plant> {
        match self {
            Entity::Plant(p) => Some(p),
            Entity::Animal(_) => None,
        }
    }

    pub fn as_animal(&self) -> Option<&Animal> {
        match self {
            Entity::Animal(a) => Some(a),
            Entity::Plant(_) => None,
        }
    }

    pub fn as_animal_mut(&mut self) -> Option<&mut Animal> {
        match self {
            Entity::Animal(a) => Some(a),
            Entity::Plant(_) => None,
        }
    }

    pub fn as_plant_mut(&mut self) -> Option<&mut Plant> {
        match self {
            Entity::Plant(p) => Some(p),
            Entity::Animal(_) => None,
        }
    }

    pub(crate) fn update(&mut self, ctx: &mut TickContext<'_>) -> Fate {
        match self {
            Entity::Plant(p) => p.update(ctx),
            Entity::Animal(a) => a.update(ctx),
        }
    }
}
