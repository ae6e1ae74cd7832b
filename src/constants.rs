//! Tunable constants for tossball
//!
//! Fixed window geometry, colors, and the default physics values that
//! `LaunchTuning` falls back to.

use bevy::prelude::*;

// =============================================================================
// WINDOW
// =============================================================================

pub const WINDOW_WIDTH: f32 = 1200.0;
pub const WINDOW_HEIGHT: f32 = 700.0;
pub const WINDOW_TITLE: &str = "Tossball";

// =============================================================================
// COLORS
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::WHITE;
pub const BALL_COLOR: Color = Color::BLACK;
pub const AIM_LINE_COLOR: Color = Color::BLACK;
pub const MARKER_COLOR: Color = Color::srgb(1.0, 0.0, 0.0); // Cursor dot + trail dots
pub const GROUND_COLOR: Color = Color::srgb(0.75, 0.75, 0.75);
pub const TEXT_PRIMARY: Color = Color::srgb(0.1, 0.1, 0.1);
pub const TEXT_SECONDARY: Color = Color::srgb(0.4, 0.4, 0.4);

// =============================================================================
// BALL
// =============================================================================

pub const BALL_RADIUS: f32 = 10.0;
pub const MARKER_RADIUS: f32 = 2.0;

/// Ball rest position, 100px in from the left edge and 100px up from the bottom.
/// Its y is also the ground line: a flight ends when the ball drops below it.
pub const INITIAL_BALL_POSITION: Vec2 = Vec2::new(
    -WINDOW_WIDTH / 2.0 + 100.0,
    -WINDOW_HEIGHT / 2.0 + 100.0,
);
pub const GROUND_Y: f32 = INITIAL_BALL_POSITION.y;

// =============================================================================
// LAUNCH PHYSICS DEFAULTS
// =============================================================================

pub const GRAVITY: f32 = 9.8; // World units per simulated second²
pub const TIME_MULTIPLIER: f32 = 4.0; // Simulated seconds per real second
pub const POWER_MULTIPLIER: f32 = 0.33; // Scales drag power into launch speed
pub const POWER_PER_DRAG_SECOND: f32 = 100.0; // Raw power gained per second of drag
pub const MAX_DRAG_SECS: f32 = 0.0; // Optional drag cap in seconds (0 = uncapped)
pub const FRAME_RATE: f64 = 60.0; // Fixed update rate for the flight loop

// =============================================================================
// UI
// =============================================================================

pub const CHARGE_GAUGE_WIDTH: f32 = 40.0;
pub const CHARGE_GAUGE_HEIGHT: f32 = 6.0;
pub const CHARGE_GAUGE_OFFSET: f32 = BALL_RADIUS + 12.0; // Above ball center
