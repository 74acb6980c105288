//! Environment model - seasons, diurnal temperature and rainfall
//!
//! Environment time runs `time_multiplier` times faster than simulation time.
//! The model is observable state only; agent behavior does not read it yet.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use verdant_creature::SimRng;

/// Season of the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn next(self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Baseline temperature per season in °C
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonTemperatures {
    pub spring: f32,
    pub summer: f32,
    pub autumn: f32,
    pub winter: f32,
}

impl SeasonTemperatures {
    pub fn for_season(&self, season: Season) -> f32 {
        match season {
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::Autumn => self.autumn,
            Season::Winter => self.winter,
        }
    }
}

impl Default for SeasonTemperatures {
    fn default() -> Self {
        Self {
            spring: 15.0,
            summer: 25.0,
            autumn: 15.0,
            winter: 5.0,
        }
    }
}

/// Environment model parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Environment seconds per simulation second
    pub time_multiplier: f32,
    pub season_length_days: f32,
    /// Length of a day in environment seconds
    pub day_length_secs: f32,
    pub base_temperatures: SeasonTemperatures,
    /// Peak deviation of the day/night temperature swing
    pub diurnal_amplitude: f32,
    /// Per environment-second chance of a rain event
    pub rain_chance: f32,
    /// Rain events set rainfall to `U[0, rain_max)`
    pub rain_max: f32,
    /// Rainfall lost per environment-second between events
    pub rain_decay: f32,
    pub initial_season: Season,
    pub initial_temperature: f32,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            time_multiplier: 100.0,
            season_length_days: 90.0,
            day_length_secs: 86_400.0,
            base_temperatures: SeasonTemperatures::default(),
            diurnal_amplitude: 5.0,
            rain_chance: 0.001,
            rain_max: 10.0,
            rain_decay: 0.1,
            initial_season: Season::Summer,
            initial_temperature: 20.0,
        }
    }
}

impl EnvironmentConfig {
    pub fn season_length_secs(&self) -> f64 {
        self.season_length_days as f64 * self.day_length_secs as f64
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.time_multiplier.is_finite() && self.time_multiplier >= 0.0) {
            return Err("environment.time_multiplier must be non-negative".to_string());
        }
        if !(self.season_length_days > 0.0 && self.day_length_secs > 0.0) {
            return Err("environment season and day lengths must be positive".to_string());
        }
        if self.rain_chance < 0.0 || self.rain_max < 0.0 || self.rain_decay < 0.0 {
            return Err("environment rain parameters must be non-negative".to_string());
        }
        Ok(())
    }
}

/// Current environment state
#[derive(Debug, Clone, Serialize)]
pub struct Environment {
    pub season: Season,
    /// Fraction of the current season elapsed, in [0, 1)
    pub season_progress: f64,
    /// °C
    pub temperature: f32,
    pub rainfall: f32,
    /// Total environment seconds elapsed
    pub elapsed: f64,
    #[serde(skip)]
    config: EnvironmentConfig,
}

impl Environment {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            season: config.initial_season,
            season_progress: 0.0,
            temperature: config.initial_temperature,
            rainfall: 0.0,
            elapsed: 0.0,
            config,
        }
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    /// Fraction of the current day elapsed, in [0, 1)
    pub fn day_progress(&self) -> f64 {
        let day = self.config.day_length_secs as f64;
        self.elapsed.rem_euclid(day) / day
    }

    /// Advance by `dt` simulation seconds
    pub fn update<R: SimRng + ?Sized>(&mut self, dt: f32, rng: &mut R) {
        let scaled = dt * self.config.time_multiplier;
        self.elapsed += scaled as f64;

        self.season_progress += scaled as f64 / self.config.season_length_secs();
        while self.season_progress >= 1.0 {
            self.season_progress -= 1.0;
            self.season = self.season.next();
            log::info!("Season changed to {}", self.season);
        }

        self.update_temperature();
        self.update_rainfall(scaled, rng);
    }

    fn update_temperature(&mut self) {
        let base = self.config.base_temperatures.for_season(self.season);
        let daily = (self.day_progress() * TAU).sin() as f32 * self.config.diurnal_amplitude;
        self.temperature = base + daily;
    }

    fn update_rainfall<R: SimRng + ?Sized>(&mut self, scaled_dt: f32, rng: &mut R) {
        if rng.check_probability(self.config.rain_chance * scaled_dt) {
            self.rainfall = rng.gen_f32() * self.config.rain_max;
            log::trace!("Rain event: {:.2}", self.rainfall);
        } else {
            self.rainfall = (self.rainfall - self.config.rain_decay * scaled_dt).max(0.0);
        }
    }
}
