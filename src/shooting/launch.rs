//! Ball launch system

use bevy::prelude::*;

use crate::ball::{Ball, BallFlight, TrajectoryPath};
use crate::constants::GROUND_Y;
use crate::input::LaunchInput;
use crate::projectile::{Flight, FlightSummary, launch_angle, launch_velocity};
use crate::tuning::LaunchTuning;

/// Information about the last launch (for the HUD)
#[derive(Resource, Default, Debug, Clone)]
pub struct LastLaunchInfo {
    pub angle_degrees: f32,
    pub drag_secs: f32,
    pub speed: f32,
    pub velocity: Vec2,
    pub start: Vec2,
    pub summary: Option<FlightSummary>,
}

/// Launch the ball when the mouse is released.
/// Starts from wherever the ball is, so re-launching mid-flight is allowed.
pub fn launch_ball(
    time: Res<Time>,
    tuning: Res<LaunchTuning>,
    mut input: ResMut<LaunchInput>,
    mut last_launch: ResMut<LastLaunchInfo>,
    mut ball_query: Query<(&Transform, &mut BallFlight, &mut TrajectoryPath), With<Ball>>,
) {
    let Some(drag_secs) = input.take_release() else {
        return;
    };

    let Some(cursor) = input.cursor else {
        warn!("Mouse released before the cursor entered the window, ignoring launch");
        return;
    };

    let Ok((transform, mut flight, mut path)) = ball_query.single_mut() else {
        return;
    };

    let start = transform.translation.truncate();
    let angle = launch_angle(start, cursor);
    let velocity = launch_velocity(angle, drag_secs, tuning.power_multiplier);

    flight.0 = Some(Flight::new(start, time.elapsed_secs_f64(), velocity, &tuning));
    path.clear();

    *last_launch = LastLaunchInfo {
        angle_degrees: angle,
        drag_secs,
        speed: velocity.length(),
        velocity,
        start,
        summary: FlightSummary::compute(start, velocity, GROUND_Y, &tuning),
    };

    info!(
        "Launch: angle {:.1}°, drag {:.2}s, velocity ({:.1}, {:.1})",
        angle, drag_secs, velocity.x, velocity.y
    );
}
