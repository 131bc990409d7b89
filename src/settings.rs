//! Visualiser settings
//!
//! Loaded from a JSON file; any field left out keeps its default.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::consts::*;
use crate::platform::Rgba;

/// Errors from loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Visualiser configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window label; the FPS report is appended to it
    pub title: String,

    // === Canvas ===
    pub width: u32,
    pub height: u32,

    // === Ray casting ===
    /// Number of obstacles generated at startup
    pub bound_count: usize,
    /// Rays per fan
    pub resolution: usize,
    /// Ray cap length (pixels)
    pub max_distance: f32,

    // === Loop ===
    pub target_fps: u32,
    /// Obstacle layout seed (random when absent)
    pub seed: Option<u64>,

    // === Colors ===
    pub background: Rgba,
    pub bound_color: Rgba,
    pub ray_color: Rgba,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),

            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            bound_count: DEFAULT_BOUND_COUNT,
            resolution: DEFAULT_RESOLUTION,
            max_distance: DEFAULT_MAX_DISTANCE,

            target_fps: TARGET_FPS,
            seed: None,

            background: Rgba::BLACK,
            bound_color: Rgba::WHITE,
            ray_color: Rgba::LIGHT_GRAY,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    ///
    /// A missing file is not an error: defaults are used instead.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Reject values the render loop cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field, reason| Err(SettingsError::Invalid { field, reason });

        if self.width == 0 {
            return invalid("width", "must be at least 1 pixel");
        }
        if self.height == 0 {
            return invalid("height", "must be at least 1 pixel");
        }
        if self.resolution == 0 {
            return invalid("resolution", "must cast at least one ray");
        }
        if !(self.max_distance.is_finite() && self.max_distance > 0.0) {
            return invalid("max_distance", "must be a positive finite length");
        }
        if self.target_fps == 0 {
            return invalid("target_fps", "must be at least 1");
        }
        Ok(())
    }
}
