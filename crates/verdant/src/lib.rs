//! Verdant - headless ecosystem driver
//!
//! Loads layered configuration, runs the ecosystem at a fixed step and
//! reports census snapshots. Rendering and input live elsewhere.

pub mod config;
pub mod headless;

pub use config::{AppConfig, RunConfig};
pub use headless::{HeadlessRunner, Report, RunSummary};

