//! Proximity searches used by animal decision making
//!
//! All searches skip candidates whose position fails the passability check,
//! so stone tiles make targets flicker in and out of view.

use glam::Vec2;
use verdant_simulation::{AnimalSpecies, TILE_SIZE};

use crate::entity::Entity;
use crate::population::TickContext;
use crate::types::EntityId;

/// Nearest reachable entity within `radius` of `origin` accepted by `accept`
pub fn find_nearest<F>(
    ctx: &mut TickContext<'_>,
    origin: Vec2,
    radius: f32,
    accept: F,
) -> Option<EntityId>
where
    F: Fn(&Entity) -> bool,
{
    let passability = ctx.tuning.passability();
    let mut best: Option<(EntityId, f32)> = None;

    for entity in ctx.population.nearby(origin, radius) {
        if !accept(entity) {
            continue;
        }
        if !passability.is_reachable(&mut *ctx.terrain, &mut *ctx.rng, entity.position()) {
            continue;
        }
        let distance = origin.distance(entity.position());
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((entity.id(), distance));
        }
    }

    best.map(|(id, _)| id)
}

/// Prey for a carnivore, trying species in preference order
pub fn find_prey(ctx: &mut TickContext<'_>, origin: Vec2) -> Option<EntityId> {
    let radius = ctx.tuning.prey_radius_tiles * TILE_SIZE;
    for species in AnimalSpecies::PREY_PREFERENCE {
        let found = find_nearest(ctx, origin, radius, |e| {
            e.as_animal().is_some_and(|a| a.species == species)
        });
        if found.is_some() {
            return found;
        }
    }
    None
}

pub fn find_nearest_tree(ctx: &mut TickContext<'_>, origin: Vec2) -> Option<EntityId> {
    let radius = ctx.tuning.tree_search_radius_tiles * TILE_SIZE;
    find_nearest(ctx, origin, radius, Entity::is_plant)
}

/// Nearest carnivore close enough to trigger fleeing
pub fn detect_predator(ctx: &mut TickContext<'_>, origin: Vec2) -> Option<EntityId> {
    let radius = ctx.tuning.predator_radius_tiles * TILE_SIZE;
    find_nearest(ctx, origin, radius, |e| {
        e.as_animal().is_some_and(|a| a.species.is_carnivore())
    })
}
