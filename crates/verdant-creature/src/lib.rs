//! Plant and animal agents for Verdant
//!
//! This crate implements:
//! - The entity sum type (plants and animals) and its per-tick update
//! - Plant growth, seeding and mutation
//! - The animal behavior state machine (wander, hunt, flee, rest, seek tree)
//! - The entity population with proximity queries and snapshot ticking
//! - Terrain access traits decoupling agents from the chunk store

pub mod animal;
pub mod behavior;
pub mod entity;
pub mod movement;
pub mod perception;
pub mod plant;
pub mod population;
pub mod rng_trait;
pub mod stats;
pub mod traits;
pub mod tuning;
pub mod types;

// Re-export main types for convenience
pub use animal::Animal;
pub use behavior::BehaviorState;
pub use entity::{Entity, Fate};
pub use movement::Passability;
pub use plant::Plant;
pub use population::{Population, TickContext};
pub use rng_trait::SimRng;
pub use stats::{DeathCause, LifecycleCounters, LifecycleStats, NoopStats};
pub use traits::{TerrainAccess, TerrainFn};
pub use tuning::BehaviorTuning;
pub use types::{Energy, EntityId};
