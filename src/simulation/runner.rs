//! Headless launch runner
//!
//! Replays the game's fixed-rate flight loop without a window: the flight
//! is advanced once per frame at `1 / frame_rate` clock seconds until it lands.

use bevy::prelude::Vec2;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::constants::GROUND_Y;
use crate::projectile::{Flight, FlightStep, FlightSummary, launch_angle, launch_velocity};
use crate::tuning::{LaunchTuning, load_launch_tuning_from_file};

use super::config::{SimConfig, SimMode};
use super::parallel::{init_parallel, run_sweep};
use super::plot::render_plot;
use super::scenario::{Aim, LaunchRequest, parse_scenario_file};

/// Upper bound on frames per launch (10 minutes at 60 FPS)
pub const MAX_FRAMES: usize = 36_000;

/// Outcome of one headless launch
#[derive(Debug, Clone, Serialize)]
pub struct LaunchReport {
    pub name: String,
    pub angle_degrees: f32,
    pub drag_secs: f32,
    pub velocity: (f32, f32),
    /// Frames until landing (including the launch frame)
    pub frames: usize,
    pub landed: bool,
    pub landing: (f32, f32),
    pub summary: Option<FlightSummary>,
    pub path: Vec<(f32, f32)>,
}

/// Run one launch frame by frame
pub fn run_launch(request: &LaunchRequest, tuning: &LaunchTuning) -> LaunchReport {
    let angle = match request.aim {
        Aim::Angle(angle) => angle,
        Aim::Cursor(cursor) => launch_angle(request.start, cursor),
    };
    let velocity = launch_velocity(angle, request.drag_secs, tuning.power_multiplier);
    let flight = Flight::new(request.start, 0.0, velocity, tuning);
    let dt = 1.0 / tuning.frame_rate;

    let mut path = Vec::new();
    let mut landed = false;
    let mut last = request.start;

    for frame in 0..MAX_FRAMES {
        let step = flight.advance(frame as f64 * dt, GROUND_Y);
        last = step.position();
        path.push((last.x, last.y));
        if matches!(step, FlightStep::Landed(_)) {
            landed = true;
            break;
        }
    }

    LaunchReport {
        name: request.name.clone(),
        angle_degrees: angle,
        drag_secs: request.drag_secs,
        velocity: (velocity.x, velocity.y),
        frames: path.len(),
        landed,
        landing: (last.x, last.y),
        summary: FlightSummary::compute(request.start, velocity, GROUND_Y, tuning),
        path,
    }
}

/// Fixed-width table of reports
pub fn format_table(reports: &[LaunchReport]) -> String {
    let mut out = format!(
        "{:<20} {:>7} {:>6} {:>9} {:>9} {:>8} {:>8} {:>7}\n",
        "launch", "angle", "drag", "vx", "vy", "range", "apex", "frames"
    );
    for r in reports {
        let (range, apex) = r
            .summary
            .map(|s| (s.range, s.apex_height))
            .unwrap_or((0.0, 0.0));
        out.push_str(&format!(
            "{:<20} {:>7.1} {:>6.2} {:>9.2} {:>9.2} {:>8.1} {:>8.1} {:>7}\n",
            r.name, r.angle_degrees, r.drag_secs, r.velocity.0, r.velocity.1, range, apex, r.frames
        ));
    }
    out
}

/// Load tuning for a headless run. Missing file means defaults.
fn load_tuning(path: &str, quiet: bool) -> LaunchTuning {
    if !Path::new(path).exists() {
        return LaunchTuning::default();
    }
    match load_launch_tuning_from_file(path) {
        Ok(tuning) => {
            if !quiet {
                eprintln!("Loaded tuning from {}", path);
            }
            tuning
        }
        Err(err) => {
            eprintln!("Warning: {}, using defaults", err);
            LaunchTuning::default()
        }
    }
}

/// Build the launch list for the configured mode
fn build_requests(config: &SimConfig) -> Result<Vec<LaunchRequest>, String> {
    let start = crate::constants::INITIAL_BALL_POSITION;
    match &config.mode {
        SimMode::Single => {
            let aim = match config.cursor {
                Some((x, y)) => Aim::Cursor(Vec2::new(x, y)),
                None => Aim::Angle(config.angle),
            };
            Ok(vec![LaunchRequest {
                name: "single".to_string(),
                start,
                aim,
                drag_secs: config.drag,
            }])
        }
        SimMode::Sweep => {
            if config.sweep_angles.is_empty() || config.sweep_drags.is_empty() {
                return Err("Sweep needs at least one angle and one drag".to_string());
            }
            let mut requests = Vec::new();
            for &angle in &config.sweep_angles {
                for &drag in &config.sweep_drags {
                    requests.push(LaunchRequest {
                        name: format!("a{:.0}_d{:.2}", angle, drag),
                        start,
                        aim: Aim::Angle(angle),
                        drag_secs: drag,
                    });
                }
            }
            Ok(requests)
        }
        SimMode::Scenario { path } => {
            let scenario = parse_scenario_file(Path::new(path))?;
            if !config.quiet {
                eprintln!(
                    "Scenario '{}': {} launches",
                    scenario.name,
                    scenario.launch.len()
                );
            }
            scenario.requests()
        }
    }
}

/// Run the simulation described by `config` and write its outputs
pub fn run_simulation(config: SimConfig) -> Result<(), String> {
    let tuning = load_tuning(&config.tuning_file, config.quiet);
    let requests = build_requests(&config)?;

    let reports = if config.mode == SimMode::Sweep {
        init_parallel(config.threads)?;
        run_sweep(&requests, &tuning)
    } else {
        requests.iter().map(|r| run_launch(r, &tuning)).collect()
    };

    let output = if config.json {
        serde_json::to_string_pretty(&reports)
            .map_err(|e| format!("Failed to serialize reports: {}", e))?
    } else {
        format_table(&reports)
    };

    match &config.output_file {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
            }
            fs::write(path, output).map_err(|e| format!("Failed to write {}: {}", path, e))?;
            if !config.quiet {
                eprintln!("Wrote {} launches to {}", reports.len(), path);
            }
        }
        None => print!("{}", output),
    }

    if let Some(plot_path) = &config.plot_file {
        render_plot(&reports, plot_path)?;
        if !config.quiet {
            eprintln!("Saved plot to {}", plot_path);
        }
    }

    Ok(())
}
