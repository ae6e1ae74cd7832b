//! Parallel sweep execution
//!
//! Uses Rayon to run many headless launches concurrently. Launches are
//! independent pure computations, so no state is shared between workers.

use rayon::prelude::*;

use crate::tuning::LaunchTuning;

use super::runner::{LaunchReport, run_launch};
use super::scenario::LaunchRequest;

/// Initialize the global pool with the given thread count.
/// Call this once at startup before running parallel sweeps.
pub fn init_parallel(threads: usize) -> Result<(), String> {
    if threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| format!("Failed to initialize Rayon thread pool: {}", e))?;
    }
    // If threads == 0, use Rayon's default (auto-detect)
    Ok(())
}

/// Run launches in parallel. Returns reports in the same order as requests.
pub fn run_sweep(requests: &[LaunchRequest], tuning: &LaunchTuning) -> Vec<LaunchReport> {
    requests
        .par_iter()
        .map(|request| run_launch(request, tuning))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INITIAL_BALL_POSITION;
    use crate::simulation::scenario::Aim;

    #[test]
    fn test_sweep_matches_sequential_order() {
        let tuning = LaunchTuning::default();
        let requests: Vec<_> = (1..=8)
            .map(|i| LaunchRequest {
                name: format!("a{}", i * 20),
                start: INITIAL_BALL_POSITION,
                aim: Aim::Angle(i as f32 * 20.0),
                drag_secs: 1.5,
            })
            .collect();

        let parallel = run_sweep(&requests, &tuning);
        assert_eq!(parallel.len(), requests.len());
        for (request, report) in requests.iter().zip(&parallel) {
            let sequential = run_launch(request, &tuning);
            assert_eq!(report.name, request.name);
            assert_eq!(report.frames, sequential.frames);
            assert_eq!(report.landing, sequential.landing);
        }
    }
}
