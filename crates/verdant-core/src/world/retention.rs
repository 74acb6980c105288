//! Chunk retention policies
//!
//! The store asks its policy which chunks to drop after each generation.
//! Evicted chunks regenerate identically on their next lookup.

use ahash::AHashSet;
use glam::IVec2;

/// Decides which loaded chunks to unload
pub trait RetentionPolicy: Send {
    /// Chunks to evict, given loaded positions oldest-first and the
    /// positions that must stay loaded
    fn evictions(&self, generation_order: &[IVec2], protected: &AHashSet<IVec2>) -> Vec<IVec2>;

    fn name(&self) -> &'static str;
}

/// Keep every chunk forever
#[derive(Debug, Default, Clone, Copy)]
pub struct RetainAll;

impl RetentionPolicy for RetainAll {
    fn evictions(&self, _generation_order: &[IVec2], _protected: &AHashSet<IVec2>) -> Vec<IVec2> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "retain-all"
    }
}

/// Cap the number of loaded chunks, dropping the oldest unprotected ones first
#[derive(Debug, Clone, Copy)]
pub struct LoadedChunkLimit {
    pub max_loaded: usize,
}

impl LoadedChunkLimit {
    pub fn new(max_loaded: usize) -> Self {
        Self { max_loaded }
    }
}

impl RetentionPolicy for LoadedChunkLimit {
    fn evictions(&self, generation_order: &[IVec2], protected: &AHashSet<IVec2>) -> Vec<IVec2> {
        let excess = generation_order.len().saturating_sub(self.max_loaded);
        generation_order
            .iter()
            .filter(|pos| !protected.contains(*pos))
            .take(excess)
            .copied()
            .collect()
    }

    fn name(&self) -> &'static str {
        "loaded-chunk-limit"
    }
}
