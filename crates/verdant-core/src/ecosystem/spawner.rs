//! Initial seeding parameters and the periodic ambient spawner

use serde::{Deserialize, Serialize};
use verdant_creature::SimRng;
use verdant_simulation::AnimalSpecies;

/// What a placement command asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementKind {
    /// A tree of a random species
    Tree,
    Rabbit,
    Deer,
    Wolf,
}

impl PlacementKind {
    pub const ALL: [PlacementKind; 4] = [
        PlacementKind::Tree,
        PlacementKind::Rabbit,
        PlacementKind::Deer,
        PlacementKind::Wolf,
    ];

    pub fn animal_species(self) -> Option<AnimalSpecies> {
        match self {
            PlacementKind::Tree => None,
            PlacementKind::Rabbit => Some(AnimalSpecies::Rabbit),
            PlacementKind::Deer => Some(AnimalSpecies::Deer),
            PlacementKind::Wolf => Some(AnimalSpecies::Wolf),
        }
    }
}

impl From<AnimalSpecies> for PlacementKind {
    fn from(species: AnimalSpecies) -> Self {
        match species {
            AnimalSpecies::Rabbit => PlacementKind::Rabbit,
            AnimalSpecies::Deer => PlacementKind::Deer,
            AnimalSpecies::Wolf => PlacementKind::Wolf,
        }
    }
}

/// Population seeding and spawning settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Tree placement attempts at startup (kept only where a plant can root)
    pub initial_trees: u32,
    pub initial_rabbits: u32,
    pub initial_deer: u32,
    pub initial_wolves: u32,

    /// Run the ambient spawner at all
    pub enabled: bool,
    /// Simulated seconds between spawn rounds
    pub interval: f32,
    pub tree_chance: f32,
    pub rabbit_chance: f32,
    pub deer_chance: f32,
    pub wolf_chance: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            initial_trees: 200,
            initial_rabbits: 50,
            initial_deer: 30,
            initial_wolves: 10,
            enabled: true,
            interval: 5.0,
            tree_chance: 0.3,
            rabbit_chance: 0.2,
            deer_chance: 0.1,
            wolf_chance: 0.05,
        }
    }
}

impl SpawnConfig {
    pub fn chance(&self, kind: PlacementKind) -> f32 {
        match kind {
            PlacementKind::Tree => self.tree_chance,
            PlacementKind::Rabbit => self.rabbit_chance,
            PlacementKind::Deer => self.deer_chance,
            PlacementKind::Wolf => self.wolf_chance,
        }
    }

    pub fn initial_count(&self, kind: PlacementKind) -> u32 {
        match kind {
            PlacementKind::Tree => self.initial_trees,
            PlacementKind::Rabbit => self.initial_rabbits,
            PlacementKind::Deer => self.initial_deer,
            PlacementKind::Wolf => self.initial_wolves,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.interval.is_finite() && self.interval > 0.0) {
            return Err("spawning.interval must be positive".to_string());
        }
        for kind in PlacementKind::ALL {
            let chance = self.chance(kind);
            if !(0.0..=1.0).contains(&chance) {
                return Err(format!("spawning chance for {:?} must be in [0, 1], got {}", kind, chance));
            }
        }
        Ok(())
    }
}

/// Rolls ambient spawns once per interval of simulated time
#[derive(Debug, Clone)]
pub struct AmbientSpawner {
    timer: f32,
    config: SpawnConfig,
}

impl AmbientSpawner {
    pub fn new(config: SpawnConfig) -> Self {
        Self { timer: 0.0, config }
    }

    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    /// Advance the timer; returns the kinds to place this tick
    ///
    /// At most one round fires per call, and the timer restarts from zero.
    pub fn update<R: SimRng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> Vec<PlacementKind> {
        if !self.config.enabled {
            return Vec::new();
        }

        self.timer += dt;
        if self.timer < self.config.interval {
            return Vec::new();
        }
        self.timer = 0.0;

        PlacementKind::ALL
            .into_iter()
            .filter(|kind| rng.check_probability(self.config.chance(*kind)))
            .collect()
    }
}
