//! Lifecycle statistics collection
//!
//! Agents report births, deaths and kills through [`LifecycleStats`]. The
//! ecosystem keeps a [`LifecycleCounters`]; headless tools that don't care
//! can pass [`NoopStats`].

use std::collections::BTreeMap;

use serde::Serialize;
use verdant_simulation::{AnimalSpecies, SpeciesKey};

/// Why an entity left the population
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DeathCause {
    OldAge,
    Exhaustion,
    Drowned,
    Starved,
    Eaten,
}

impl DeathCause {
    pub const ALL: [DeathCause; 5] = [
        DeathCause::OldAge,
        DeathCause::Exhaustion,
        DeathCause::Drowned,
        DeathCause::Starved,
        DeathCause::Eaten,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DeathCause::OldAge => "old age",
            DeathCause::Exhaustion => "exhaustion",
            DeathCause::Drowned => "drowned",
            DeathCause::Starved => "starved",
            DeathCause::Eaten => "eaten",
        }
    }
}

impl std::fmt::Display for DeathCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for collecting lifecycle events
pub trait LifecycleStats {
    /// A new entity joined the population
    fn record_birth(&mut self, species: SpeciesKey);

    /// An entity was removed from the population
    fn record_death(&mut self, species: SpeciesKey, cause: DeathCause);

    /// A predator consumed its prey
    fn record_kill(&mut self, predator: AnimalSpecies, prey: AnimalSpecies);
}

/// No-op stats collector (for headless tools and tests)
#[derive(Debug, Default)]
pub struct NoopStats;

impl LifecycleStats for NoopStats {
    fn record_birth(&mut self, _species: SpeciesKey) {}
    fn record_death(&mut self, _species: SpeciesKey, _cause: DeathCause) {}
    fn record_kill(&mut self, _predator: AnimalSpecies, _prey: AnimalSpecies) {}
}

/// Running totals since the ecosystem started
#[derive(Debug, Clone, Default, Serialize)]
pub struct LifecycleCounters {
    pub births: BTreeMap<SpeciesKey, u64>,
    pub deaths: BTreeMap<DeathCause, u64>,
    pub kills: BTreeMap<AnimalSpecies, u64>,
}

impl LifecycleCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_births(&self) -> u64 {
        self.births.values().sum()
    }

    pub fn total_deaths(&self) -> u64 {
        self.deaths.values().sum()
    }

    pub fn deaths_by(&self, cause: DeathCause) -> u64 {
        self.deaths.get(&cause).copied().unwrap_or(0)
    }

    /// Kills made by a predator species
    pub fn kills_by(&self, predator: AnimalSpecies) -> u64 {
        self.kills.get(&predator).copied().unwrap_or(0)
    }
}

impl LifecycleStats for LifecycleCounters {
    fn record_birth(&mut self, species: SpeciesKey) {
        *self.births.entry(species).or_default() += 1;
    }

    fn record_death(&mut self, species: SpeciesKey, cause: DeathCause) {
        log::trace!("{} died: {}", species, cause);
        *self.deaths.entry(cause).or_default() += 1;
    }

    fn record_kill(&mut self, predator: AnimalSpecies, prey: AnimalSpecies) {
        log::trace!("{} killed a {}", predator, prey);
        *self.kills.entry(predator).or_default() += 1;
    }
}
