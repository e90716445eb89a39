//! Emission parameters
//!
//! `EmitConfig` carries every numeric knob of `ParticleSystem::create`.
//! Effects can be tuned in TOML or JSON files and loaded at runtime; any
//! field left out of a file falls back to its default.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{emission, particle};
use crate::error::{DustError, DustResult};

/// Parameters for one burst of particles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    /// Emission origin
    pub origin: Vec2,
    /// Number of particles in the burst
    pub count: usize,
    /// Added to the vertical velocity every tick
    pub gravity: f32,
    /// Draw angles at random instead of spacing them evenly
    pub random_spacing: bool,
    /// Emission angle range in radians
    pub angle_range: (f32, f32),
    /// Square sprite size range in pixels, inclusive
    pub size_range: (u32, u32),
    pub speed_range: (f32, f32),
    pub scale_speed_range: (f32, f32),
    pub alpha_speed_range: (f32, f32),
    pub rotation_speed_range: (f32, f32),
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            count: emission::PARTICLE_COUNT,
            gravity: emission::GRAVITY,
            random_spacing: emission::RANDOM_SPACING,
            angle_range: (emission::MIN_ANGLE, emission::MAX_ANGLE),
            size_range: (particle::MIN_SIZE, particle::MAX_SIZE),
            speed_range: (particle::MIN_SPEED, particle::MAX_SPEED),
            scale_speed_range: (particle::MIN_SCALE_SPEED, particle::MAX_SCALE_SPEED),
            alpha_speed_range: (particle::MIN_ALPHA_SPEED, particle::MAX_ALPHA_SPEED),
            rotation_speed_range: (particle::MIN_ROTATION_SPEED, particle::MAX_ROTATION_SPEED),
        }
    }
}

impl EmitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Vec2::new(x, y);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_random_spacing(mut self, random_spacing: bool) -> Self {
        self.random_spacing = random_spacing;
        self
    }

    pub fn with_angles(mut self, min: f32, max: f32) -> Self {
        self.angle_range = (min, max);
        self
    }

    pub fn with_size(mut self, min: u32, max: u32) -> Self {
        self.size_range = (min, max);
        self
    }

    pub fn with_speed(mut self, min: f32, max: f32) -> Self {
        self.speed_range = (min, max);
        self
    }

    pub fn with_scale_speed(mut self, min: f32, max: f32) -> Self {
        self.scale_speed_range = (min, max);
        self
    }

    pub fn with_alpha_speed(mut self, min: f32, max: f32) -> Self {
        self.alpha_speed_range = (min, max);
        self
    }

    pub fn with_rotation_speed(mut self, min: f32, max: f32) -> Self {
        self.rotation_speed_range = (min, max);
        self
    }

    /// Parse a TOML effect description
    pub fn from_toml_str(raw: &str) -> DustResult<Self> {
        toml::from_str(raw).map_err(|e| DustError::ConfigParse {
            format: "TOML",
            message: e.to_string(),
        })
    }

    /// Parse a JSON effect description
    pub fn from_json_str(raw: &str) -> DustResult<Self> {
        serde_json::from_str(raw).map_err(|e| DustError::ConfigParse {
            format: "JSON",
            message: e.to_string(),
        })
    }

    /// Load an effect file, picking the format from its extension
    pub fn load(path: impl AsRef<Path>) -> DustResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> DustResult<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(DustError::UnknownConfigFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let raw = std::fs::read_to_string(path).map_err(|source| DustError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = parse(&raw)?;
        log::debug!("Loaded effect config {} ({} particles)", path.display(), config.count);
        Ok(config)
    }
}
