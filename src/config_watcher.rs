//! Config file auto-reload system
//!
//! Polls the launch tuning file every few seconds and reloads it when modified.

use bevy::prelude::*;
use std::fs;
use std::time::SystemTime;

use crate::tuning::{LaunchTuning, load_launch_tuning_from_file};

/// How often to check for config changes (seconds)
const CHECK_INTERVAL: f32 = 2.0;

/// Tracks the modification time of the tuning file for hot-reload
#[derive(Resource)]
pub struct ConfigWatcher {
    pub path: String,
    /// Time since last check
    pub timer: f32,
    /// Last known modification time
    pub tuning_mtime: Option<SystemTime>,
}

impl ConfigWatcher {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let tuning_mtime = get_mtime(&path);
        Self {
            path,
            timer: 0.0,
            tuning_mtime,
        }
    }

    /// Returns true when the file's modification time differs from the last check
    pub fn poll_changed(&mut self) -> bool {
        let new_mtime = get_mtime(&self.path);
        if new_mtime != self.tuning_mtime {
            self.tuning_mtime = new_mtime;
            return true;
        }
        false
    }
}

/// Get file modification time, or None if file doesn't exist
fn get_mtime(path: &str) -> Option<SystemTime> {
    fs::metadata(path).ok().and_then(|m| m.modified().ok())
}

/// Check for tuning file changes and reload.
/// A deleted file keeps the current values.
pub fn check_config_changes(
    time: Res<Time>,
    mut watcher: ResMut<ConfigWatcher>,
    mut tuning: ResMut<LaunchTuning>,
    mut fixed_time: ResMut<Time<Fixed>>,
) {
    watcher.timer += time.delta_secs();

    if watcher.timer < CHECK_INTERVAL {
        return;
    }
    watcher.timer = 0.0;

    if !watcher.poll_changed() || watcher.tuning_mtime.is_none() {
        return;
    }

    match load_launch_tuning_from_file(&watcher.path) {
        Ok(new_tuning) => {
            if new_tuning.frame_rate != tuning.frame_rate {
                fixed_time.set_timestep_hz(new_tuning.frame_rate);
            }
            *tuning = new_tuning;
            info!("Auto-reloaded launch tuning from {}", watcher.path);
        }
        Err(err) => warn!("{}, keeping current tuning", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    #[test]
    fn test_detects_file_creation_and_removal() {
        let path = std::env::temp_dir().join("tossball_watch_test.json");
        let _ = fs::remove_file(&path);
        let mut watcher = ConfigWatcher::new(path.to_string_lossy());
        assert!(watcher.tuning_mtime.is_none());
        assert!(!watcher.poll_changed());

        fs::write(&path, "{}").unwrap();
        assert!(watcher.poll_changed());
        assert!(!watcher.poll_changed(), "Unchanged file is not reported twice");

        fs::remove_file(&path).unwrap();
        assert!(watcher.poll_changed());
        assert!(watcher.tuning_mtime.is_none());
    }

    #[test]
    fn test_reload_swaps_tuning_and_frame_rate() {
        let path = std::env::temp_dir().join("tossball_reload_test.json");
        let _ = fs::remove_file(&path);

        let mut watcher = ConfigWatcher::new(path.to_string_lossy());
        watcher.timer = CHECK_INTERVAL;

        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world.insert_resource(Time::<Fixed>::from_hz(60.0));
        world.insert_resource(LaunchTuning::default());
        world.insert_resource(watcher);

        fs::write(&path, r#"{ "gravity": 20.0, "frame_rate": 30.0 }"#).unwrap();
        world.run_system_once(check_config_changes).unwrap();
        let _ = fs::remove_file(&path);

        let tuning = world.resource::<LaunchTuning>();
        assert_eq!(tuning.gravity, 20.0);
        assert_eq!(tuning.frame_rate, 30.0);
        assert_eq!(
            world.resource::<Time<Fixed>>().timestep(),
            Duration::from_secs_f64(1.0 / 30.0)
        );
        assert_eq!(world.resource::<ConfigWatcher>().timer, 0.0, "Timer restarts");
    }

    #[test]
    fn test_no_reload_before_interval() {
        let path = std::env::temp_dir().join("tossball_reload_wait_test.json");
        let _ = fs::remove_file(&path);

        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world.insert_resource(Time::<Fixed>::from_hz(60.0));
        world.insert_resource(LaunchTuning::default());
        world.insert_resource(ConfigWatcher::new(path.to_string_lossy()));

        fs::write(&path, r#"{ "gravity": 20.0 }"#).unwrap();
        world.run_system_once(check_config_changes).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(*world.resource::<LaunchTuning>(), LaunchTuning::default());
    }
}
