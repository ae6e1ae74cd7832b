//! Launch Simulation Tool - Headless projectile launches
//!
//! Run launches without a window to inspect trajectories.
//!
//! Usage:
//!   cargo run --bin simulate -- --help
//!   cargo run --bin simulate -- --angle 60 --drag 2 --plot
//!   cargo run --bin simulate -- --sweep --angles 30,45,60 --json
//!   cargo run --bin simulate -- --scenario scenarios/basic.toml

use tossball::simulation::{SimConfig, run_simulation};

fn main() {
    let config = SimConfig::from_args();
    if let Err(e) = run_simulation(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
