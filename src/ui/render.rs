//! Gizmo drawing for the ground, aim line, and trajectory trail

use bevy::prelude::*;

use crate::ball::{Ball, TrajectoryPath};
use crate::constants::*;
use crate::input::LaunchInput;

/// Ground line under the resting ball
pub fn draw_ground(mut gizmos: Gizmos) {
    let y = GROUND_Y - BALL_RADIUS;
    gizmos.line_2d(
        Vec2::new(-WINDOW_WIDTH / 2.0, y),
        Vec2::new(WINDOW_WIDTH / 2.0, y),
        GROUND_COLOR,
    );
}

/// Line from the ball to the cursor with a dot at the cursor
pub fn draw_aim_line(
    mut gizmos: Gizmos,
    input: Res<LaunchInput>,
    ball_query: Query<&Transform, With<Ball>>,
) {
    let Some(cursor) = input.cursor else {
        return;
    };
    let Ok(ball_transform) = ball_query.single() else {
        return;
    };

    let ball_pos = ball_transform.translation.truncate();
    gizmos.line_2d(ball_pos, cursor, AIM_LINE_COLOR);
    gizmos.circle_2d(cursor, MARKER_RADIUS, MARKER_COLOR);
}

/// Small dots along the current launch's path
pub fn draw_trajectory(mut gizmos: Gizmos, path_query: Query<&TrajectoryPath, With<Ball>>) {
    for path in &path_query {
        for &pos in path.points() {
            gizmos.circle_2d(pos, MARKER_RADIUS, MARKER_COLOR);
        }
    }
}
