//! Simulation configuration

use serde::{Deserialize, Serialize};

use crate::tuning::LAUNCH_TUNING_FILE;

/// Simulation mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SimMode {
    /// Run a single launch
    #[default]
    Single,
    /// Run every angle × drag combination in parallel
    Sweep,
    /// Run the launches listed in a TOML scenario file
    Scenario {
        /// Path to scenario file
        path: String,
    },
}

/// Configuration for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Simulation mode
    pub mode: SimMode,
    /// Launch angle in degrees (single mode)
    pub angle: f32,
    /// Cursor position to aim at instead of a fixed angle (single mode)
    pub cursor: Option<(f32, f32)>,
    /// Drag duration in seconds (single mode)
    pub drag: f32,
    /// Angles to sweep (degrees)
    pub sweep_angles: Vec<f32>,
    /// Drag durations to sweep (seconds)
    pub sweep_drags: Vec<f32>,
    /// Launch tuning file
    pub tuning_file: String,
    /// Output file path (None = stdout)
    pub output_file: Option<String>,
    /// PNG plot of the trajectories
    pub plot_file: Option<String>,
    /// Print JSON instead of a table
    pub json: bool,
    /// Suppress progress output
    pub quiet: bool,
    /// Number of worker threads for sweeps (0 = auto)
    pub threads: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            mode: SimMode::Single,
            angle: 45.0,
            cursor: None,
            drag: 1.0,
            sweep_angles: (1..=17).map(|i| i as f32 * 10.0).collect(), // 10..170
            sweep_drags: vec![0.5, 1.0, 1.5, 2.0, 2.5, 3.0],
            tuning_file: LAUNCH_TUNING_FILE.to_string(),
            output_file: None,
            plot_file: None,
            json: false,
            quiet: false,
            threads: 0,
        }
    }
}

/// Parse a comma-separated list of numbers, skipping anything unparsable
fn parse_list(s: &str) -> Vec<f32> {
    s.split(',').filter_map(|v| v.trim().parse().ok()).collect()
}

/// Default plot path, timestamped so repeated runs don't overwrite each other
pub fn default_plot_path() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("showcase/trajectory_{}.png", timestamp)
}

impl SimConfig {
    /// Parse configuration from command line arguments
    pub fn from_args() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_arg_list(&args)
    }

    /// Parse configuration from an argument list (without the program name)
    pub fn from_arg_list(args: &[String]) -> Self {
        let mut config = Self::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--angle" => {
                    if i + 1 < args.len() {
                        config.angle = args[i + 1].parse().unwrap_or(config.angle);
                        i += 1;
                    }
                }
                "--cursor" => {
                    if i + 1 < args.len() {
                        // "x,y" in world coordinates
                        let values = parse_list(&args[i + 1]);
                        if let &[x, y] = values.as_slice() {
                            config.cursor = Some((x, y));
                        } else {
                            eprintln!("Warning: --cursor expects x,y (got {})", args[i + 1]);
                        }
                        i += 1;
                    }
                }
                "--drag" => {
                    if i + 1 < args.len() {
                        config.drag = args[i + 1].parse().unwrap_or(config.drag);
                        i += 1;
                    }
                }
                "--sweep" => {
                    config.mode = SimMode::Sweep;
                }
                "--angles" => {
                    if i + 1 < args.len() {
                        config.sweep_angles = parse_list(&args[i + 1]);
                        i += 1;
                    }
                }
                "--drags" => {
                    if i + 1 < args.len() {
                        config.sweep_drags = parse_list(&args[i + 1]);
                        i += 1;
                    }
                }
                "--scenario" => {
                    if i + 1 < args.len() {
                        config.mode = SimMode::Scenario {
                            path: args[i + 1].clone(),
                        };
                        i += 1;
                    }
                }
                "--tuning" => {
                    if i + 1 < args.len() {
                        config.tuning_file = args[i + 1].clone();
                        i += 1;
                    }
                }
                "--output" => {
                    if i + 1 < args.len() {
                        config.output_file = Some(args[i + 1].clone());
                        i += 1;
                    }
                }
                "--plot" => {
                    let path = if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                        i += 1;
                        args[i].clone()
                    } else {
                        default_plot_path()
                    };
                    config.plot_file = Some(path);
                }
                "--json" => {
                    config.json = true;
                }
                "--quiet" | "-q" => {
                    config.quiet = true;
                }
                "--threads" => {
                    if i + 1 < args.len() {
                        config.threads = args[i + 1].parse().unwrap_or(0);
                        i += 1;
                    }
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                other => {
                    eprintln!("Warning: ignoring unknown argument '{}'", other);
                }
            }
            i += 1;
        }

        config
    }
}

fn print_help() {
    println!(
        r#"Launch Simulation Tool - Headless projectile launches

USAGE:
    cargo run --bin simulate -- [OPTIONS]

OPTIONS:
    --angle <DEG>       Launch angle in degrees, 0 = right, 90 = up (default: 45)
    --cursor <X,Y>      Aim at a world position instead of using --angle
    --drag <SECS>       Drag duration in seconds (default: 1.0)
    --sweep             Run every angle × drag combination in parallel
    --angles <LIST>     Comma-separated sweep angles (default: 10,20,...,170)
    --drags <LIST>      Comma-separated sweep drag durations (default: 0.5,...,3.0)
    --scenario <FILE>   Run the launches listed in a TOML scenario file
    --tuning <FILE>     Launch tuning JSON (default: config/launch_tuning.json)
    --output <FILE>     Write the report to a file (default: stdout)
    --plot [FILE]       Render trajectories to a PNG (default: showcase/trajectory_<time>.png)
    --json              Print JSON instead of a table
    --threads <N>       Worker threads for sweeps (default: auto)
    --quiet, -q         Suppress progress output
    --help, -h          Show this help

EXAMPLES:
    # Steep lob with a long drag
    cargo run --bin simulate -- --angle 70 --drag 2.5 --plot lob.png

    # Sweep a few angles as JSON
    cargo run --bin simulate -- --sweep --angles 30,45,60 --json

    # Scenario file
    cargo run --bin simulate -- --scenario scenarios/basic.toml --plot
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_args() {
        let config = SimConfig::from_arg_list(&[]);
        assert_eq!(config.mode, SimMode::Single);
        assert_eq!(config.angle, 45.0);
        assert_eq!(config.sweep_angles.first(), Some(&10.0));
        assert_eq!(config.sweep_angles.last(), Some(&170.0));
    }

    #[test]
    fn test_single_launch_args() {
        let config = SimConfig::from_arg_list(&args(&[
            "--angle", "60", "--drag", "2.5", "--cursor", "10,20", "--json",
        ]));
        assert_eq!(config.angle, 60.0);
        assert_eq!(config.drag, 2.5);
        assert_eq!(config.cursor, Some((10.0, 20.0)));
        assert!(config.json);
    }

    #[test]
    fn test_sweep_lists() {
        let config = SimConfig::from_arg_list(&args(&[
            "--sweep", "--angles", "30, 45,x,60", "--drags", "1,2", "--threads", "4",
        ]));
        assert_eq!(config.mode, SimMode::Sweep);
        assert_eq!(config.sweep_angles, vec![30.0, 45.0, 60.0]);
        assert_eq!(config.sweep_drags, vec![1.0, 2.0]);
        assert_eq!(config.threads, 4);
    }

    #[test]
    fn test_plot_with_and_without_path() {
        let config = SimConfig::from_arg_list(&args(&["--plot", "out.png"]));
        assert_eq!(config.plot_file.as_deref(), Some("out.png"));

        let config = SimConfig::from_arg_list(&args(&["--plot", "--json"]));
        let path = config.plot_file.unwrap();
        assert!(path.starts_with("showcase/trajectory_") && path.ends_with(".png"));
        assert!(config.json, "Flag after bare --plot is still parsed");
    }

    #[test]
    fn test_scenario_mode() {
        let config = SimConfig::from_arg_list(&args(&["--scenario", "s.toml"]));
        assert_eq!(
            config.mode,
            SimMode::Scenario {
                path: "s.toml".to_string()
            }
        );
    }
}
