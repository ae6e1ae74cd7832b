//! TOML scenario file parsing
//!
//! A scenario is a named batch of launches:
//!
//! ```toml
//! name = "Lobs"
//!
//! [[launch]]
//! name = "steep"
//! angle = 75.0
//! drag = 1.5
//!
//! [[launch]]
//! name = "at the cursor"
//! cursor_x = 0.0
//! cursor_y = 100.0
//! drag = 2.0
//! ```

use bevy::prelude::Vec2;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{GROUND_Y, INITIAL_BALL_POSITION};

/// Complete scenario definition from TOML file
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub launch: Vec<LaunchDef>,
}

/// One launch as written in the scenario file
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchDef {
    pub name: String,
    pub angle: Option<f32>,
    pub cursor_x: Option<f32>,
    pub cursor_y: Option<f32>,
    pub drag: f32,
    #[serde(default = "default_start_x")]
    pub start_x: f32,
    #[serde(default = "default_start_y")]
    pub start_y: f32,
}

fn default_start_x() -> f32 {
    INITIAL_BALL_POSITION.x
}

fn default_start_y() -> f32 {
    INITIAL_BALL_POSITION.y
}

/// How a launch is aimed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aim {
    /// Launch angle in degrees
    Angle(f32),
    /// World position of the cursor at release
    Cursor(Vec2),
}

/// A launch ready to run
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRequest {
    pub name: String,
    pub start: Vec2,
    pub aim: Aim,
    pub drag_secs: f32,
}

impl LaunchDef {
    pub fn to_request(&self) -> Result<LaunchRequest, String> {
        let aim = match (self.angle, self.cursor_x, self.cursor_y) {
            (Some(angle), None, None) => Aim::Angle(angle),
            (None, Some(x), Some(y)) => Aim::Cursor(Vec2::new(x, y)),
            _ => {
                return Err(format!(
                    "Launch '{}' needs either angle or both cursor_x and cursor_y",
                    self.name
                ));
            }
        };
        if !(self.drag.is_finite() && self.drag >= 0.0) {
            return Err(format!("Launch '{}' has invalid drag {}", self.name, self.drag));
        }
        if !(self.start_y.is_finite() && self.start_y >= GROUND_Y) {
            return Err(format!(
                "Launch '{}' starts below the ground (start_y {} < {})",
                self.name, self.start_y, GROUND_Y
            ));
        }
        Ok(LaunchRequest {
            name: self.name.clone(),
            start: Vec2::new(self.start_x, self.start_y),
            aim,
            drag_secs: self.drag,
        })
    }
}

impl Scenario {
    /// Convert every launch, failing on the first invalid one
    pub fn requests(&self) -> Result<Vec<LaunchRequest>, String> {
        self.launch.iter().map(LaunchDef::to_request).collect()
    }
}

/// Parse a scenario file from path
pub fn parse_scenario_file(path: &Path) -> Result<Scenario, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}
