//! Per-species population statistics

use std::collections::BTreeMap;

use serde::Serialize;
use verdant_creature::{Entity, Population};
use verdant_simulation::{AnimalSpecies, PlantSpecies, SpeciesKey};

/// Aggregates for one species
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpeciesStats {
    pub count: usize,
    /// Plants: current size; animals: species body size
    pub average_size: f32,
    pub average_age: f32,
    /// Plants only
    pub average_resistance: Option<f32>,
    /// Animals only
    pub average_energy: Option<f32>,
}

#[derive(Default)]
struct Accumulator {
    count: usize,
    size: f64,
    age: f64,
    resistance: f64,
    energy: f64,
}

impl Accumulator {
    fn add(&mut self, entity: &Entity) {
        self.count += 1;
        self.age += entity.age() as f64;
        match entity {
            Entity::Plant(p) => {
                self.size += p.size as f64;
                self.resistance += p.resistance as f64;
            }
            Entity::Animal(a) => {
                self.size += a.def().size as f64;
                self.energy += a.energy.current as f64;
            }
        }
    }

    fn finish(&self, key: SpeciesKey) -> SpeciesStats {
        if self.count == 0 {
            return SpeciesStats::default();
        }
        let n = self.count as f64;
        let is_plant = matches!(key, SpeciesKey::Plant(_));
        SpeciesStats {
            count: self.count,
            average_size: (self.size / n) as f32,
            average_age: (self.age / n) as f32,
            average_resistance: is_plant.then(|| (self.resistance / n) as f32),
            average_energy: (!is_plant).then(|| (self.energy / n) as f32),
        }
    }
}

/// Snapshot of the population, refreshed once per tick
#[derive(Debug, Clone, Default, Serialize)]
pub struct Census {
    /// Every known species, including extinct ones with a zero count
    pub species: BTreeMap<SpeciesKey, SpeciesStats>,
    pub plants: usize,
    pub animals: usize,
}

impl Census {
    pub fn from_population(population: &Population) -> Self {
        let mut accumulators: BTreeMap<SpeciesKey, Accumulator> = PlantSpecies::ALL
            .into_iter()
            .map(SpeciesKey::Plant)
            .chain(AnimalSpecies::ALL.into_iter().map(SpeciesKey::Animal))
            .map(|key| (key, Accumulator::default()))
            .collect();

        let mut plants = 0;
        let mut animals = 0;
        for entity in population.iter() {
            if entity.is_plant() {
                plants += 1;
            } else {
                animals += 1;
            }
            accumulators
                .entry(entity.species_key())
                .or_default()
                .add(entity);
        }

        let species = accumulators
            .iter()
            .map(|(key, acc)| (*key, acc.finish(*key)))
            .collect();

        Self {
            species,
            plants,
            animals,
        }
    }

    pub fn get(&self, key: SpeciesKey) -> Option<&SpeciesStats> {
        self.species.get(&key)
    }

    pub fn count(&self, key: SpeciesKey) -> usize {
        self.get(key).map_or(0, |s| s.count)
    }

    pub fn total(&self) -> usize {
        self.plants + self.animals
    }
}

impl std::fmt::Display for Census {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .species
            .iter()
            .map(|(key, stats)| format!("{}={}", key.name(), stats.count))
            .collect();
        write!(f, "{} plants, {} animals [{}]", self.plants, self.animals, parts.join(" "))
    }
}
