//! Tossball - aim with the mouse, drag to charge, watch the ball fly
//!
//! This crate provides the launch kinematics, the Bevy components, resources
//! and systems of the game, and a headless simulator built on the same math.

// Core modules
pub mod config_watcher;
pub mod constants;
pub mod projectile;
pub mod simulation;
pub mod tuning;

// Game logic modules
pub mod ball;
pub mod input;
pub mod shooting;
pub mod ui;

// Re-export commonly used types for convenience
pub use ball::{Ball, BallFlight, TrajectoryPath, advance_flight, reset_ball};
pub use config_watcher::ConfigWatcher;
pub use constants::*;
pub use input::{LaunchInput, capture_input};
pub use projectile::{
    Flight, FlightStep, FlightSummary, landing_time, launch_angle, launch_angle_raw,
    launch_speed, launch_velocity, position_at,
};
pub use shooting::{DragCharge, LastLaunchInfo, launch_ball, update_drag_charge};
pub use tuning::{LAUNCH_TUNING_FILE, LaunchTuning, load_launch_tuning_or_default};
pub use ui::LaunchText;
