//! Terrain generation configuration - serializable noise parameters
//!
//! The seed is NOT part of the config - same config + different seed = different terrain.

use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};
use serde::{Deserialize, Serialize};
use verdant_simulation::TerrainThresholds;

/// Complete terrain generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainGenConfig {
    /// Rolling base terrain
    pub base: NoiseLayerConfig,
    /// Low-frequency mountains; only positive values raise the terrain
    pub mountains: NoiseLayerConfig,
    /// Small high-frequency bumps
    pub detail: NoiseLayerConfig,
    pub mountain_weight: f32,
    pub detail_weight: f32,

    /// Tile offset applied to the base layer when sampling moisture
    pub moisture_offset: f32,
    /// Tile offset applied to the detail layer when sampling moisture
    pub moisture_detail_offset: f32,
    pub moisture_detail_weight: f32,

    /// Height to tile classification
    pub thresholds: TerrainThresholds,
}

/// One OpenSimplex2 layer; more than one octave layers it as fBm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseLayerConfig {
    /// Added to the world seed so layers decorrelate
    pub seed_offset: i32,
    /// Cycles per tile
    pub frequency: f32,
    /// 1-8
    pub octaves: u8,
    pub lacunarity: f32,
    pub gain: f32,
}

impl Default for TerrainGenConfig {
    fn default() -> Self {
        Self {
            base: NoiseLayerConfig::single_octave(0, 0.02),
            mountains: NoiseLayerConfig::single_octave(1, 0.005),
            detail: NoiseLayerConfig::single_octave(2, 0.1),
            mountain_weight: 1.5,
            detail_weight: 0.1,
            moisture_offset: 1000.0,
            moisture_detail_offset: 2000.0,
            moisture_detail_weight: 0.2,
            thresholds: TerrainThresholds::DEFAULT,
        }
    }
}

impl Default for NoiseLayerConfig {
    fn default() -> Self {
        Self::single_octave(0, 0.01)
    }
}

impl NoiseLayerConfig {
    pub fn single_octave(seed_offset: i32, frequency: f32) -> Self {
        Self {
            seed_offset,
            frequency,
            octaves: 1,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }

    /// Noise source for this layer under `world_seed`
    pub fn build_noise(&self, world_seed: u64) -> FastNoiseLite {
        let mut noise = FastNoiseLite::with_seed((world_seed as i32).wrapping_add(self.seed_offset));
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(self.frequency));
        if self.octaves > 1 {
            noise.set_fractal_type(Some(FractalType::FBm));
            noise.set_fractal_octaves(Some(i32::from(self.octaves)));
            noise.set_fractal_lacunarity(Some(self.lacunarity));
            noise.set_fractal_gain(Some(self.gain));
        }
        noise
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(format!("frequency must be positive, got {}", self.frequency));
        }
        if !(1..=8).contains(&self.octaves) {
            return Err(format!("octaves must be within 1..=8, got {}", self.octaves));
        }
        Ok(())
    }
}

impl TerrainGenConfig {
    pub fn validate(&self) -> Result<(), String> {
        for (name, layer) in [
            ("base", &self.base),
            ("mountains", &self.mountains),
            ("detail", &self.detail),
        ] {
            layer.validate().map_err(|e| format!("terrain.{name}: {e}"))?;
        }
        let t = &self.thresholds;
        if !(t.water_below <= t.sand_below && t.sand_below <= t.stone_above) {
            return Err(format!(
                "terrain thresholds must be ordered water <= sand <= stone, got {} / {} / {}",
                t.water_below, t.sand_below, t.stone_above
            ));
        }
        Ok(())
    }
}
