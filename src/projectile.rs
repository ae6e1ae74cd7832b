//! Launch kinematics
//!
//! Pure functions shared by the game systems and the headless simulator.
//! Positions are world coordinates (+y up). The flight is a closed-form
//! parabola evaluated at simulated time, not an integrated simulation.

use bevy::prelude::Vec2;

use crate::constants::POWER_PER_DRAG_SECOND;
use crate::tuning::LaunchTuning;

/// Angle from ball to cursor in degrees, in (-90, 90].
///
/// Uses the arctangent of the absolute vertical displacement over the
/// horizontal displacement, so a cursor to the left gives a negative angle.
/// Returns exactly 90 when the cursor is straight above or below the ball.
pub fn launch_angle_raw(ball: Vec2, cursor: Vec2) -> f32 {
    let dx = cursor.x - ball.x;
    if dx == 0.0 {
        return 90.0;
    }
    let dy = (cursor.y - ball.y).abs();
    (dy / dx).atan().to_degrees()
}

/// Launch angle in degrees, in [0, 180]. 0 points right, 90 up, 180 left.
///
/// A cursor below the ball still launches upward; only the horizontal side
/// of the cursor picks the direction.
pub fn launch_angle(ball: Vec2, cursor: Vec2) -> f32 {
    let raw = launch_angle_raw(ball, cursor);
    // atan of a zero numerator over a negative dx is -0.0, still a left launch
    if cursor.x < ball.x { 180.0 + raw } else { raw }
}

/// Launch speed for a drag of the given duration
pub fn launch_speed(drag_secs: f32, power_multiplier: f32) -> f32 {
    power_multiplier * drag_secs * POWER_PER_DRAG_SECOND
}

/// Decompose a launch into velocity components.
/// Horizontal sign follows the angle, vertical is always upward.
pub fn launch_velocity(angle_deg: f32, drag_secs: f32, power_multiplier: f32) -> Vec2 {
    let speed = launch_speed(drag_secs, power_multiplier);
    let rad = angle_deg.to_radians();
    Vec2::new(speed * rad.cos(), (speed * rad.sin()).abs())
}

/// Displacement from the launch point after `t` simulated seconds
pub fn displacement_at(velocity: Vec2, t: f32, gravity: f32) -> Vec2 {
    Vec2::new(velocity.x * t, velocity.y * t - 0.5 * gravity * t * t)
}

/// Position after `t` simulated seconds
pub fn position_at(start: Vec2, velocity: Vec2, t: f32, gravity: f32) -> Vec2 {
    start + displacement_at(velocity, t, gravity)
}

/// Simulated time at which a ball launched `height` above the ground with
/// vertical speed `vy` comes back down to it. `None` when gravity is not
/// positive or the ball starts below the ground.
pub fn landing_time(vy: f32, height: f32, gravity: f32) -> Option<f32> {
    if gravity <= 0.0 || height < 0.0 {
        return None;
    }
    // y(t) = h + vy*t - g*t²/2 = 0, take the later root
    let disc = vy * vy + 2.0 * gravity * height;
    Some((vy + disc.sqrt()) / gravity)
}

/// Result of advancing a flight one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightStep {
    Airborne(Vec2),
    /// Ball reached the ground; y is clamped to the ground line
    Landed(Vec2),
}

impl FlightStep {
    pub fn position(&self) -> Vec2 {
        match self {
            FlightStep::Airborne(pos) | FlightStep::Landed(pos) => *pos,
        }
    }
}

/// Scratch state for one launch.
/// Gravity and time scale are fixed at launch; a tuning reload only
/// affects the next launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flight {
    pub start_pos: Vec2,
    /// Clock time of the launch (seconds)
    pub start_time: f64,
    pub velocity: Vec2,
    pub gravity: f32,
    pub time_multiplier: f32,
}

impl Flight {
    pub fn new(start_pos: Vec2, start_time: f64, velocity: Vec2, tuning: &LaunchTuning) -> Self {
        Self {
            start_pos,
            start_time,
            velocity,
            gravity: tuning.gravity,
            time_multiplier: tuning.time_multiplier,
        }
    }

    /// Simulated seconds since launch at clock time `now`
    pub fn sim_time(&self, now: f64) -> f32 {
        ((now - self.start_time).max(0.0) as f32) * self.time_multiplier
    }

    /// Where the ball is at clock time `now`
    pub fn advance(&self, now: f64, ground_y: f32) -> FlightStep {
        let t = self.sim_time(now);
        let pos = position_at(self.start_pos, self.velocity, t, self.gravity);
        if pos.y < ground_y {
            FlightStep::Landed(Vec2::new(pos.x, ground_y))
        } else {
            FlightStep::Airborne(pos)
        }
    }
}

/// Closed-form summary of a launch, used by the HUD and the simulator
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FlightSummary {
    /// Simulated seconds until landing
    pub flight_time: f32,
    /// Real seconds until landing
    pub real_time: f32,
    /// Highest point above the launch point
    pub apex_height: f32,
    /// Horizontal distance covered (signed)
    pub range: f32,
    pub landing: (f32, f32),
}

impl FlightSummary {
    pub fn compute(start: Vec2, velocity: Vec2, ground_y: f32, tuning: &LaunchTuning) -> Option<Self> {
        let g = tuning.gravity;
        let flight_time = landing_time(velocity.y, start.y - ground_y, g)?;
        let apex_height = velocity.y * velocity.y / (2.0 * g);
        let range = velocity.x * flight_time;
        Some(Self {
            flight_time,
            real_time: flight_time / tuning.time_multiplier,
            apex_height,
            range,
            landing: (start.x + range, ground_y),
        })
    }
}
