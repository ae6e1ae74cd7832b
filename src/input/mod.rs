//! Input module - LaunchInput resource and capture_input system

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::tuning::LaunchTuning;

/// Buffered mouse/keyboard state for aiming and launching
#[derive(Resource, Default, Debug)]
pub struct LaunchInput {
    /// Cursor in world coordinates, None until it first enters the window
    pub cursor: Option<Vec2>,
    /// Clock time the left button went down (None when not dragging)
    pub press_time: Option<f64>,
    /// Drag duration of a release waiting to be consumed by launch_ball
    pub released_drag: Option<f32>,
    /// R pressed - reset waiting to be consumed
    pub reset_pressed: bool,
}

impl LaunchInput {
    /// Start a drag at clock time `now`
    pub fn press(&mut self, now: f64) {
        self.press_time = Some(now);
    }

    /// End a drag at clock time `now`. Accumulates until consumed.
    /// A release without a matching press is ignored.
    pub fn release(&mut self, now: f64, tuning: &LaunchTuning) {
        if let Some(start) = self.press_time.take() {
            let drag = (now - start).max(0.0) as f32;
            self.released_drag = Some(tuning.clamp_drag(drag));
        }
    }

    /// Current drag duration while the button is held
    pub fn drag_secs(&self, now: f64) -> Option<f32> {
        self.press_time.map(|start| (now - start).max(0.0) as f32)
    }

    /// Take the pending release, if any
    pub fn take_release(&mut self) -> Option<f32> {
        self.released_drag.take()
    }

    /// Take the pending reset flag
    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_pressed)
    }
}

/// Runs in Update to capture input before it's cleared.
pub fn capture_input(
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    tuning: Res<LaunchTuning>,
    time: Res<Time>,
    mut input: ResMut<LaunchInput>,
) {
    // Track cursor in world space; keep last known position when it leaves the window
    if let (Ok(window), Ok((camera, camera_transform))) = (windows.single(), camera_query.single())
        && let Some(screen_pos) = window.cursor_position()
        && let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, screen_pos)
    {
        input.cursor = Some(world_pos);
    }

    let now = time.elapsed_secs_f64();

    if mouse.just_pressed(MouseButton::Left) {
        input.press(now);
    }
    if mouse.just_released(MouseButton::Left) {
        input.release(now, &tuning);
        if let Some(drag) = input.released_drag {
            debug!("Mouse released after {:.2}s drag", drag);
        }
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        input.reset_pressed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projectile::{launch_speed, launch_velocity};

    #[test]
    fn test_press_release_measures_drag() {
        let tuning = LaunchTuning::default();
        let mut input = LaunchInput::default();
        input.press(1.0);
        assert_eq!(input.drag_secs(1.5), Some(0.5));
        input.release(2.25, &tuning);
        assert_eq!(input.take_release(), Some(1.25));
        assert_eq!(input.take_release(), None, "Release is consumed once");
        assert_eq!(input.drag_secs(3.0), None, "Not dragging after release");
    }

    #[test]
    fn test_release_without_press_ignored() {
        let mut input = LaunchInput::default();
        input.release(5.0, &LaunchTuning::default());
        assert_eq!(input.take_release(), None);
    }

    #[test]
    fn test_uncapped_by_default() {
        let tuning = LaunchTuning::default();
        let mut input = LaunchInput::default();
        input.press(0.0);
        input.release(5.0, &tuning);
        let drag = input.take_release();
        assert_eq!(drag, Some(5.0), "Long drags keep their full duration");

        let speed = launch_velocity(45.0, 5.0, tuning.power_multiplier).length();
        assert!((speed - launch_speed(5.0, tuning.power_multiplier)).abs() < 1e-3);
    }

    #[test]
    fn test_drag_capped() {
        let tuning = LaunchTuning {
            max_drag_secs: 2.0,
            ..Default::default()
        };
        let mut input = LaunchInput::default();
        input.press(0.0);
        input.release(10.0, &tuning);
        assert_eq!(input.take_release(), Some(2.0));
    }

    #[test]
    fn test_reset_flag_consumed() {
        let mut input = LaunchInput {
            reset_pressed: true,
            ..Default::default()
        };
        assert!(input.take_reset());
        assert!(!input.take_reset());
    }
}
