//! Launch tuning config (gravity, time scale, power) loaded from JSON

use bevy::log::warn;
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::*;

// Serde default functions so older config files keep loading
fn default_gravity() -> f32 {
    GRAVITY
}
fn default_time_multiplier() -> f32 {
    TIME_MULTIPLIER
}
fn default_power_multiplier() -> f32 {
    POWER_MULTIPLIER
}
fn default_max_drag_secs() -> f32 {
    MAX_DRAG_SECS
}
fn default_frame_rate() -> f64 {
    FRAME_RATE
}

/// Path to the launch tuning config
pub const LAUNCH_TUNING_FILE: &str = "config/launch_tuning.json";

/// Physics values for a launch. Lives as a resource in the game and is
/// passed by reference to the headless simulation.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchTuning {
    /// Downward acceleration in world units per simulated second²
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    /// Simulated seconds elapsed per real second of flight
    #[serde(default = "default_time_multiplier")]
    pub time_multiplier: f32,
    /// Launch speed per unit of drag power
    #[serde(default = "default_power_multiplier")]
    pub power_multiplier: f32,
    /// Drag durations are capped here (0 = uncapped)
    #[serde(default = "default_max_drag_secs")]
    pub max_drag_secs: f32,
    /// Fixed update rate of the flight loop (Hz)
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
}

impl Default for LaunchTuning {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            time_multiplier: default_time_multiplier(),
            power_multiplier: default_power_multiplier(),
            max_drag_secs: default_max_drag_secs(),
            frame_rate: default_frame_rate(),
        }
    }
}

impl LaunchTuning {
    /// Replace values that would break the flight loop with their defaults.
    /// Returns the names of the fields that were replaced.
    pub fn sanitize(&mut self) -> Vec<&'static str> {
        let defaults = Self::default();
        let mut replaced = Vec::new();

        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            self.gravity = defaults.gravity;
            replaced.push("gravity");
        }
        if !(self.time_multiplier.is_finite() && self.time_multiplier > 0.0) {
            self.time_multiplier = defaults.time_multiplier;
            replaced.push("time_multiplier");
        }
        if !(self.power_multiplier.is_finite() && self.power_multiplier >= 0.0) {
            self.power_multiplier = defaults.power_multiplier;
            replaced.push("power_multiplier");
        }
        if !(self.max_drag_secs.is_finite() && self.max_drag_secs >= 0.0) {
            self.max_drag_secs = defaults.max_drag_secs;
            replaced.push("max_drag_secs");
        }
        if !(self.frame_rate.is_finite() && self.frame_rate >= 1.0) {
            self.frame_rate = defaults.frame_rate;
            replaced.push("frame_rate");
        }

        replaced
    }

    /// Sanitize and log any replaced fields
    pub fn sanitized(mut self) -> Self {
        for field in self.sanitize() {
            warn!("Invalid launch tuning value for '{}', using default", field);
        }
        self
    }

    /// Apply the drag cap (a cap of 0 means uncapped)
    pub fn clamp_drag(&self, drag_secs: f32) -> f32 {
        let drag_secs = drag_secs.max(0.0);
        if self.max_drag_secs > 0.0 {
            drag_secs.min(self.max_drag_secs)
        } else {
            drag_secs
        }
    }

    /// Save tuning to file
    pub fn save(&self, path: &str) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, json)
    }
}

pub fn load_launch_tuning_from_file(path: &str) -> Result<LaunchTuning, String> {
    let contents = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    let tuning: LaunchTuning =
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path, e))?;
    Ok(tuning.sanitized())
}

/// Load tuning from file, falling back to defaults when the file is
/// missing or malformed
pub fn load_launch_tuning_or_default(path: &str) -> LaunchTuning {
    if !Path::new(path).exists() {
        return LaunchTuning::default();
    }
    match load_launch_tuning_from_file(path) {
        Ok(tuning) => tuning,
        Err(err) => {
            warn!("{}, using defaults", err);
            LaunchTuning::default()
        }
    }
}
