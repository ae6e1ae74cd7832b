//! Launch simulation module - headless launches for checking trajectories
//!
//! Runs launches without a window, either one at a time, as a parallel
//! angle × drag sweep, or from a TOML scenario file, and reports the
//! results as a table, JSON, or a PNG plot.

pub mod config;
pub mod parallel;
pub mod plot;
pub mod runner;
pub mod scenario;

pub use config::{SimConfig, SimMode};
pub use runner::{LaunchReport, run_launch, run_simulation};
pub use scenario::{Aim, LaunchRequest, Scenario};
