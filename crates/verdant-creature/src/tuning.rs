//! Behavior tuning constants
//!
//! Distances are expressed in tiles and converted to world units at the
//! point of use. Durations are in seconds of simulation time.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::movement::Passability;

/// Tunable constants shared by all agents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorTuning {
    /// Energy capacity of every animal
    pub max_energy: f32,
    /// Energy drained per second while alive
    pub energy_drain_per_sec: f32,
    /// Energy regained per second while resting
    pub rest_regen_per_sec: f32,
    /// Below this energy an animal starts resting
    pub exhaustion_threshold: f32,
    /// Length of one rest period
    pub rest_duration: f32,
    /// Hunting longer than this forces a rest
    pub hunt_duration: f32,
    /// Continuous time on water before drowning
    pub submersion_limit: f32,
    /// Time without a kill before a carnivore starves
    pub starvation_limit: f32,
    /// Energy gained when a carnivore locks onto prey
    pub detection_bonus: f32,
    /// Energy gained from a kill
    pub kill_bonus: f32,

    pub kill_range_tiles: f32,
    pub flee_release_tiles: f32,
    pub predator_radius_tiles: f32,
    pub prey_radius_tiles: f32,
    pub tree_search_radius_tiles: f32,

    /// Per-tick chance a herbivore re-scans for its nearest tree
    pub tree_refresh_chance: f32,
    /// Chance a stone tile counts as passable on a given check
    pub stone_passability: f32,
    /// Herbivores stop seeking once within this fraction of their leash
    pub seek_arrival_fraction: f32,
    /// Speed multiplier while hunting
    pub hunt_speed_multiplier: f32,
    /// Wander heading drift amplitude (radians per second)
    pub wander_turn_rate: f32,

    /// Chance a seedling mutates
    pub mutation_chance: f32,
    pub mutation_min: f32,
    pub mutation_max: f32,
    /// Size of a freshly placed plant
    pub seedling_size: f32,
    /// Maximum plant size is `max_size_base + U[0, max_size_spread)`
    pub max_size_base: f32,
    pub max_size_spread: f32,
    /// Seeds land between this fraction and the full seed range
    pub seed_min_fraction: f32,
}

impl Default for BehaviorTuning {
    fn default() -> Self {
        Self {
            max_energy: 100.0,
            energy_drain_per_sec: 0.5,
            rest_regen_per_sec: 10.0,
            exhaustion_threshold: 30.0,
            rest_duration: 5.0,
            hunt_duration: 5.0,
            submersion_limit: 5.0,
            starvation_limit: 15.0,
            detection_bonus: 20.0,
            kill_bonus: 50.0,
            kill_range_tiles: 1.5,
            flee_release_tiles: 10.0,
            predator_radius_tiles: 5.0,
            prey_radius_tiles: 20.0,
            tree_search_radius_tiles: 15.0,
            tree_refresh_chance: 0.1,
            stone_passability: 0.3,
            seek_arrival_fraction: 0.8,
            hunt_speed_multiplier: 2.0,
            wander_turn_rate: PI,
            mutation_chance: 0.1,
            mutation_min: 0.9,
            mutation_max: 1.1,
            seedling_size: 0.2,
            max_size_base: 1.0,
            max_size_spread: 0.5,
            seed_min_fraction: 0.5,
        }
    }
}

impl BehaviorTuning {
    pub fn passability(&self) -> Passability {
        Passability {
            stone_chance: self.stone_passability,
        }
    }

    /// Check that every value is finite and every probability lies in [0, 1]
    pub fn validate(&self) -> Result<(), String> {
        let probabilities = [
            ("tree_refresh_chance", self.tree_refresh_chance),
            ("stone_passability", self.stone_passability),
            ("mutation_chance", self.mutation_chance),
            ("seek_arrival_fraction", self.seek_arrival_fraction),
            ("seed_min_fraction", self.seed_min_fraction),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be within [0, 1], got {value}"));
            }
        }

        let non_negative = [
            ("max_energy", self.max_energy),
            ("energy_drain_per_sec", self.energy_drain_per_sec),
            ("rest_regen_per_sec", self.rest_regen_per_sec),
            ("exhaustion_threshold", self.exhaustion_threshold),
            ("rest_duration", self.rest_duration),
            ("hunt_duration", self.hunt_duration),
            ("submersion_limit", self.submersion_limit),
            ("starvation_limit", self.starvation_limit),
            ("kill_range_tiles", self.kill_range_tiles),
            ("flee_release_tiles", self.flee_release_tiles),
            ("predator_radius_tiles", self.predator_radius_tiles),
            ("prey_radius_tiles", self.prey_radius_tiles),
            ("tree_search_radius_tiles", self.tree_search_radius_tiles),
            ("hunt_speed_multiplier", self.hunt_speed_multiplier),
            ("seedling_size", self.seedling_size),
            ("max_size_base", self.max_size_base),
            ("max_size_spread", self.max_size_spread),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a finite non-negative number, got {value}"));
            }
        }

        if self.mutation_min > self.mutation_max {
            return Err(format!(
                "mutation_min ({}) exceeds mutation_max ({})",
                self.mutation_min, self.mutation_max
            ));
        }
        if self.exhaustion_threshold > self.max_energy {
            return Err("exhaustion_threshold exceeds max_energy".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(BehaviorTuning::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_probability() {
        let tuning = BehaviorTuning {
            stone_passability: 1.5,
            ..Default::default()
        };
        let err = tuning.validate().unwrap_err();
        assert!(err.contains("stone_passability"));
    }

    #[test]
    fn test_rejects_inverted_mutation_range() {
        let tuning = BehaviorTuning {
            mutation_min: 1.2,
            mutation_max: 0.8,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }
}
