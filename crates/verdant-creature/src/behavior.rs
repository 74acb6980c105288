//! Animal behavior state machine
//!
//! Each tick an animal first decides (possibly switching state) and then acts
//! according to the resulting state. Carnivores hunt; herbivores stay leashed
//! to a tree and flee from nearby carnivores.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use verdant_simulation::{SpeciesKey, TILE_SIZE};

use crate::animal::Animal;
use crate::entity::Entity;
use crate::movement::{step_away, step_toward};
use crate::perception;
use crate::population::TickContext;
use crate::rng_trait::SimRng;
use crate::stats::DeathCause;

/// What an animal is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorState {
    Wandering,
    Hunting,
    Fleeing,
    Resting,
    SeekingTree,
}

impl BehaviorState {
    pub fn name(self) -> &'static str {
        match self {
            BehaviorState::Wandering => "wandering",
            BehaviorState::Hunting => "hunting",
            BehaviorState::Fleeing => "fleeing",
            BehaviorState::Resting => "resting",
            BehaviorState::SeekingTree => "seeking tree",
        }
    }
}

impl std::fmt::Display for BehaviorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Animal {
    pub(crate) fn decide(&mut self, ctx: &mut TickContext<'_>) {
        if self.species.is_carnivore() {
            self.decide_carnivore(ctx);
        } else {
            self.decide_herbivore(ctx);
        }
    }

    fn decide_carnivore(&mut self, ctx: &mut TickContext<'_>) {
        if self.state == BehaviorState::Resting {
            return;
        }

        if self.state == BehaviorState::Hunting {
            self.hunt_timer += ctx.dt;
            if self.hunt_timer >= ctx.tuning.hunt_duration {
                self.start_resting(ctx.tuning);
                return;
            }
        } else {
            self.hunt_timer = 0.0;
        }

        // Re-searched every tick, so a preferred species entering range takes over
        match perception::find_prey(ctx, self.position) {
            Some(prey) => {
                self.state = BehaviorState::Hunting;
                self.target = Some(prey);
                self.energy.restore(ctx.tuning.detection_bonus);
            }
            None => {
                self.state = BehaviorState::Wandering;
                self.target = None;
            }
        }
    }

    fn decide_herbivore(&mut self, ctx: &mut TickContext<'_>) {
        if self.state == BehaviorState::Fleeing {
            return;
        }

        if ctx.rng.check_probability(ctx.tuning.tree_refresh_chance) {
            self.nearest_tree = perception::find_nearest_tree(ctx, self.position);
        }

        let tree = self.tree_position(ctx.population);
        if tree.is_none() {
            self.nearest_tree = None;
        }
        let leash = self.leash_radius();
        if tree.map_or(true, |t| self.position.distance(t) > leash) {
            self.state = BehaviorState::SeekingTree;
        }

        if let Some(predator) = perception::detect_predator(ctx, self.position) {
            self.state = BehaviorState::Fleeing;
            self.target = Some(predator);
        }
    }

    pub(crate) fn act(&mut self, ctx: &mut TickContext<'_>) {
        match self.state {
            BehaviorState::Wandering => self.wander(ctx),
            BehaviorState::Hunting => self.hunt(ctx),
            BehaviorState::Fleeing => self.flee(ctx),
            BehaviorState::Resting => self.rest(ctx),
            BehaviorState::SeekingTree => self.seek_tree(ctx),
        }
    }

    fn wander(&mut self, ctx: &mut TickContext<'_>) {
        self.heading += ctx.rng.gen_signed_half() * ctx.tuning.wander_turn_rate * ctx.dt;
        self.heading = self.heading.rem_euclid(TAU);

        let step = self.base_speed() * ctx.dt;
        let next = self.position + Vec2::from_angle(self.heading) * step;

        if self.can_step_to(ctx, next) {
            self.move_to(next);
        } else {
            self.heading = (self.heading + PI + ctx.rng.gen_signed_half() * PI).rem_euclid(TAU);
        }
    }

    /// Wander step check: terrain passability plus the herbivore leash
    fn can_step_to(&self, ctx: &mut TickContext<'_>, next: Vec2) -> bool {
        if !self.species.is_carnivore() {
            if let Some(tree) = self.tree_position(ctx.population) {
                if next.distance(tree) > self.leash_radius() {
                    return false;
                }
            }
        }
        ctx.tuning
            .passability()
            .is_reachable(&mut *ctx.terrain, &mut *ctx.rng, next)
    }

    fn hunt(&mut self, ctx: &mut TickContext<'_>) {
        let Some(prey) = self.target_position(ctx.population) else {
            self.state = BehaviorState::Wandering;
            self.target = None;
            return;
        };

        let kill_range = ctx.tuning.kill_range_tiles * TILE_SIZE;
        if self.species.is_carnivore() && self.position.distance(prey) < kill_range {
            self.kill_target(ctx);
            return;
        }

        let step = self.base_speed() * ctx.tuning.hunt_speed_multiplier * ctx.dt;
        self.move_to(step_toward(self.position, prey, step));
    }

    fn kill_target(&mut self, ctx: &mut TickContext<'_>) {
        let Some(target) = self.target.take() else {
            return;
        };
        self.state = BehaviorState::Wandering;

        let Some(Entity::Animal(prey)) = ctx.population.remove(target) else {
            return;
        };
        log::debug!(
            "{} {} killed {} {}",
            self.species,
            self.id,
            prey.species,
            prey.id
        );
        ctx.stats
            .record_death(SpeciesKey::Animal(prey.species), DeathCause::Eaten);
        ctx.stats.record_kill(self.species, prey.species);

        self.energy.restore(ctx.tuning.kill_bonus);
        self.time_since_kill = 0.0;
    }

    fn flee(&mut self, ctx: &mut TickContext<'_>) {
        let Some(threat) = self.target_position(ctx.population) else {
            self.state = BehaviorState::Wandering;
            self.target = None;
            return;
        };

        if self.position.distance(threat) > ctx.tuning.flee_release_tiles * TILE_SIZE {
            self.state = BehaviorState::Wandering;
            self.target = None;
            return;
        }

        let step = self.base_speed() * ctx.dt;
        self.move_to(step_away(self.position, threat, step, self.heading));
    }

    fn rest(&mut self, ctx: &mut TickContext<'_>) {
        self.rest_timer -= ctx.dt;
        self.energy.restore(ctx.tuning.rest_regen_per_sec * ctx.dt);
        if self.rest_timer <= 0.0 || self.energy.is_full() {
            self.state = BehaviorState::Wandering;
        }
    }

    fn seek_tree(&mut self, ctx: &mut TickContext<'_>) {
        let Some(tree) = self.tree_position(ctx.population) else {
            self.nearest_tree = None;
            self.state = BehaviorState::Wandering;
            return;
        };

        if self.position.distance(tree) < self.leash_radius() * ctx.tuning.seek_arrival_fraction {
            self.state = BehaviorState::Wandering;
            return;
        }

        let step = self.base_speed() * ctx.dt;
        self.move_to(step_toward(self.position, tree, step));
    }
}
