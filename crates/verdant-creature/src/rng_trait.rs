//! RNG trait abstraction for agent updates
//!
//! Every stochastic decision goes through this trait so callers can pass
//! a seeded generator in tests and an entropy-seeded one at runtime.

use std::f32::consts::TAU;

/// Random number helpers used by plant and animal logic
pub trait SimRng {
    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }

    /// Uniform bearing in [0, 2π)
    fn gen_angle(&mut self) -> f32 {
        self.gen_f32() * TAU
    }

    /// Uniform value in [-0.5, 0.5)
    fn gen_signed_half(&mut self) -> f32 {
        self.gen_f32() - 0.5
    }

    /// Uniform value in [min, max)
    fn gen_between(&mut self, min: f32, max: f32) -> f32 {
        min + self.gen_f32() * (max - min)
    }
}

// Blanket implementation for any type implementing rand::Rng, including
// `dyn RngCore` trait objects
impl<T: ?Sized + rand::Rng> SimRng for T {
    fn gen_f32(&mut self) -> f32 {
        rand::Rng::gen(self)
    }
}
