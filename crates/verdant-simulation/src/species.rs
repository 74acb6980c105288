//! Species definitions
//!
//! Static parameter tables shared by every instance of a species. Entities
//! store the species enum and look up the table on demand.

use serde::{Deserialize, Serialize};

/// What an animal eats
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diet {
    Herbivore,
    Carnivore,
}

/// Animal species
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnimalSpecies {
    Rabbit,
    Deer,
    Wolf,
}

/// Definition of an animal species' properties
#[derive(Clone, Debug)]
pub struct AnimalSpeciesDef {
    pub name: &'static str,
    /// Body size relative to one tile
    pub size: f32,
    /// Base movement speed in tiles per second
    pub speed: f32,
    pub diet: Diet,
    /// Age (seconds) at which the animal dies
    pub max_age: f32,
    pub reproduction_rate: f32,
    /// Maximum distance (tiles) a herbivore roams from its cached tree
    pub leash_radius_tiles: f32,
    /// Base color (RGBA)
    pub color: [u8; 4],
}

const RABBIT: AnimalSpeciesDef = AnimalSpeciesDef {
    name: "Rabbit",
    size: 0.5,
    speed: 3.0,
    diet: Diet::Herbivore,
    max_age: 60.0,
    reproduction_rate: 0.8,
    leash_radius_tiles: 10.0,
    color: [0xA8, 0x9F, 0x91, 0xFF],
};

const DEER: AnimalSpeciesDef = AnimalSpeciesDef {
    name: "Deer",
    size: 1.5,
    speed: 3.5,
    diet: Diet::Herbivore,
    max_age: 120.0,
    reproduction_rate: 0.5,
    leash_radius_tiles: 50.0,
    color: [0x8B, 0x45, 0x13, 0xFF],
};

const WOLF: AnimalSpeciesDef = AnimalSpeciesDef {
    name: "Wolf",
    size: 1.2,
    speed: 4.0,
    diet: Diet::Carnivore,
    max_age: 180.0,
    reproduction_rate: 0.3,
    leash_radius_tiles: 50.0,
    color: [0x80, 0x80, 0x80, 0xFF],
};

impl AnimalSpecies {
    pub const ALL: [AnimalSpecies; 3] = [AnimalSpecies::Rabbit, AnimalSpecies::Deer, AnimalSpecies::Wolf];

    /// Prey in order of preference (most preferred first)
    pub const PREY_PREFERENCE: [AnimalSpecies; 2] = [AnimalSpecies::Deer, AnimalSpecies::Rabbit];

    pub fn def(self) -> &'static AnimalSpeciesDef {
        match self {
            AnimalSpecies::Rabbit => &RABBIT,
            AnimalSpecies::Deer => &DEER,
            AnimalSpecies::Wolf => &WOLF,
        }
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn diet(self) -> Diet {
        self.def().diet
    }

    pub fn is_carnivore(self) -> bool {
        self.diet() == Diet::Carnivore
    }
}

impl std::fmt::Display for AnimalSpecies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Broad plant family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantKind {
    Deciduous,
    Coniferous,
}

/// Plant (tree) species
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlantSpecies {
    Oak,
    Pine,
    Birch,
}

/// Definition of a plant species' properties
#[derive(Clone, Debug)]
pub struct PlantSpeciesDef {
    pub name: &'static str,
    pub kind: PlantKind,
    /// Size gained per second while below max size
    pub growth_rate: f32,
    /// Maximum seed dispersal distance in world units
    pub seed_range: f32,
    /// Seeding probability per second once mature
    pub seed_chance: f32,
    /// Age (seconds) before a full-grown plant starts seeding
    pub maturity_age: f32,
    /// Age (seconds) after which the plant dies
    pub max_age: f32,
    pub resistance: f32,
    /// Canopy color (RGBA)
    pub color: [u8; 4],
}

const OAK: PlantSpeciesDef = PlantSpeciesDef {
    name: "Oak",
    kind: PlantKind::Deciduous,
    growth_rate: 0.05,
    seed_range: 100.0,
    seed_chance: 0.001,
    maturity_age: 50.0,
    max_age: 300.0,
    resistance: 0.8,
    color: [0x2E, 0x7D, 0x32, 0xFF],
};

const PINE: PlantSpeciesDef = PlantSpeciesDef {
    name: "Pine",
    kind: PlantKind::Coniferous,
    growth_rate: 0.08,
    seed_range: 150.0,
    seed_chance: 0.002,
    maturity_age: 30.0,
    max_age: 200.0,
    resistance: 0.6,
    color: [0x1B, 0x5E, 0x20, 0xFF],
};

const BIRCH: PlantSpeciesDef = PlantSpeciesDef {
    name: "Birch",
    kind: PlantKind::Deciduous,
    growth_rate: 0.1,
    seed_range: 80.0,
    seed_chance: 0.0015,
    maturity_age: 20.0,
    max_age: 150.0,
    resistance: 0.5,
    color: [0x33, 0x69, 0x1E, 0xFF],
};

impl PlantSpecies {
    pub const ALL: [PlantSpecies; 3] = [PlantSpecies::Oak, PlantSpecies::Pine, PlantSpecies::Birch];

    pub fn def(self) -> &'static PlantSpeciesDef {
        match self {
            PlantSpecies::Oak => &OAK,
            PlantSpecies::Pine => &PINE,
            PlantSpecies::Birch => &BIRCH,
        }
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }
}

impl std::fmt::Display for PlantSpecies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Species of either kingdom, usable as a map key for per-species statistics
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpeciesKey {
    Plant(PlantSpecies),
    Animal(AnimalSpecies),
}

impl SpeciesKey {
    pub fn name(self) -> &'static str {
        match self {
            SpeciesKey::Plant(species) => species.name(),
            SpeciesKey::Animal(species) => species.name(),
        }
    }
}

impl std::fmt::Display for SpeciesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
