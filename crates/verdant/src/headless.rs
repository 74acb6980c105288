//! Headless run loop with periodic census reports

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ron::ser::PrettyConfig;
use serde::Serialize;
use verdant_core::creature::DeathCause;
use verdant_core::simulation::AnimalSpecies;
use verdant_core::{Census, Ecosystem, Season};

use crate::config::{AppConfig, RunConfig};

/// Snapshot taken every `report_every` ticks
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub tick: u64,
    /// Simulated seconds
    pub elapsed: f64,
    pub season: Season,
    pub temperature: f32,
    pub rainfall: f32,
    pub census: Census,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tick {} ({:.1}s) {} {:.1}°C rain {:.2}: {}",
            self.tick, self.elapsed, self.season, self.temperature, self.rainfall, self.census
        )
    }
}

/// Totals for a finished run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u64,
    pub elapsed: f64,
    pub births: u64,
    pub deaths: BTreeMap<DeathCause, u64>,
    pub kills: BTreeMap<AnimalSpecies, u64>,
    pub final_census: Census,
    pub reports: Vec<Report>,
}

impl RunSummary {
    /// Write the summary as pretty RON
    pub fn write_ron(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create summary directory")?;
        }
        let text = ron::ser::to_string_pretty(self, PrettyConfig::default())
            .context("Failed to serialize run summary")?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write run summary: {}", path.display()))?;
        log::info!("Run summary written to {}", path.display());
        Ok(())
    }
}

/// Drives an ecosystem at a fixed step
pub struct HeadlessRunner {
    ecosystem: Ecosystem,
    run: RunConfig,
}

impl HeadlessRunner {
    /// Build and seed the ecosystem
    pub fn new(config: AppConfig) -> Result<Self> {
        config.run.validate()?;
        let ecosystem = Ecosystem::with_initial_population(config.ecosystem)
            .context("Failed to create ecosystem")?;
        Ok(Self {
            ecosystem,
            run: config.run,
        })
    }

    pub fn ecosystem(&self) -> &Ecosystem {
        &self.ecosystem
    }

    fn report(&self) -> Report {
        let env = self.ecosystem.environment();
        Report {
            tick: self.ecosystem.tick_count(),
            elapsed: self.ecosystem.elapsed(),
            season: env.season,
            temperature: env.temperature,
            rainfall: env.rainfall,
            census: self.ecosystem.census().clone(),
        }
    }

    /// Run the configured number of ticks
    pub fn run(&mut self) -> RunSummary {
        log::info!(
            "Running {} ticks at dt={:.4}s (seed {})",
            self.run.ticks,
            self.run.dt,
            self.ecosystem.seed()
        );

        let mut reports = vec![self.report()];
        for tick in 1..=self.run.ticks {
            self.ecosystem.tick(self.run.dt);

            if self.run.report_every > 0 && tick % self.run.report_every == 0 {
                let report = self.report();
                log::info!("{}", report);
                reports.push(report);
            }
            if self.ecosystem.population().is_empty() {
                log::warn!("Population went extinct at tick {}", tick);
                break;
            }
        }

        self.summary(reports)
    }

    fn summary(&self, reports: Vec<Report>) -> RunSummary {
        let counters = self.ecosystem.counters();
        RunSummary {
            seed: self.ecosystem.seed(),
            ticks: self.ecosystem.tick_count(),
            elapsed: self.ecosystem.elapsed(),
            births: counters.total_births(),
            deaths: counters.deaths.clone(),
            kills: counters.kills.clone(),
            final_census: self.ecosystem.census().clone(),
            reports,
        }
    }
}
