// config.rs - Tunable parameters, one immutable snapshot per tick
//
// Keys follow the camelCase settings object the settings panel and the
// preset store exchange, so a saved preset decodes directly. Values outside
// their documented range are clamped to the nearest bound.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Documented ranges
pub const PARTICLE_COUNT_RANGE: (usize, usize) = (10, 300);
pub const PARTICLE_SIZE_RANGE: (f32, f32) = (1.0, 10.0);
pub const SPEED_RANGE: (f32, f32) = (0.5, 5.0);
pub const INTERACTION_RADIUS_RANGE: (f32, f32) = (50.0, 300.0);
pub const HUE_RANGE: (f32, f32) = (0.0, 360.0);
pub const PERCENT_RANGE: (f32, f32) = (0.0, 100.0);
pub const FADE_RANGE: (f32, f32) = (1.0, 20.0);
pub const GRAVITY_RANGE: (f32, f32) = (-1.0, 1.0);
pub const TURBULENCE_RANGE: (f32, f32) = (0.0, 5.0);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Each particle keeps its own hue, cycled while near the pointer.
    #[default]
    Rainbow,
    Monochrome,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleShape {
    #[default]
    Circle,
    Square,
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    pub particle_count: usize,
    pub particle_size: f32,
    /// Per-component velocity limit.
    pub speed: f32,
    /// Pointer attraction and connective-line distance.
    #[serde(alias = "lineLength")]
    pub interaction_radius: f32,
    pub color_mode: ColorMode,
    pub base_hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    /// Trail fade, percent of the previous frame removed each tick.
    pub fade_amount: f32,
    pub particle_shape: ParticleShape,
    /// Signed pull toward the surface center; negative pushes outward.
    pub gravity: f32,
    pub turbulence: f32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            particle_count: 100,
            particle_size: 3.0,
            speed: 2.0,
            interaction_radius: 100.0,
            color_mode: ColorMode::Rainbow,
            base_hue: 180.0,
            saturation: 80.0,
            brightness: 80.0,
            fade_amount: 5.0,
            particle_shape: ParticleShape::Circle,
            gravity: 0.0,
            turbulence: 0.0,
        }
    }
}

impl Configuration {
    /// Decode a preset blob. The result is already clamped.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config.clamped())
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Copy with every field pulled into its documented range.
    pub fn clamped(&self) -> Self {
        Self {
            particle_count: self
                .particle_count
                .clamp(PARTICLE_COUNT_RANGE.0, PARTICLE_COUNT_RANGE.1),
            particle_size: clamp(self.particle_size, PARTICLE_SIZE_RANGE),
            speed: clamp(self.speed, SPEED_RANGE),
            interaction_radius: clamp(self.interaction_radius, INTERACTION_RADIUS_RANGE),
            color_mode: self.color_mode,
            base_hue: clamp(self.base_hue, HUE_RANGE),
            saturation: clamp(self.saturation, PERCENT_RANGE),
            brightness: clamp(self.brightness, PERCENT_RANGE),
            fade_amount: clamp(self.fade_amount, FADE_RANGE),
            particle_shape: self.particle_shape,
            gravity: clamp(self.gravity, GRAVITY_RANGE),
            turbulence: clamp(self.turbulence, TURBULENCE_RANGE),
        }
    }

    /// Whether moving from `self` to `next` must rebuild the particle batch.
    pub fn needs_reinit(&self, next: &Configuration) -> bool {
        self.particle_count != next.particle_count || self.particle_size != next.particle_size
    }

    /// Hue a particle is painted with under this color mode.
    #[inline]
    pub fn paint_hue(&self, particle_hue: f32) -> f32 {
        match self.color_mode {
            ColorMode::Rainbow => particle_hue,
            ColorMode::Monochrome | ColorMode::Custom => self.base_hue,
        }
    }
}

// NaN collapses to the lower bound
#[inline]
fn clamp(v: f32, (lo, hi): (f32, f32)) -> f32 {
    if v.is_nan() { lo } else { v.clamp(lo, hi) }
}
