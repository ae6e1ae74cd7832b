//! HUD text: live angle, last launch, and key help

use bevy::prelude::*;

use crate::ball::{Ball, BallFlight};
use crate::input::LaunchInput;
use crate::projectile::launch_angle;
use crate::shooting::{DragCharge, LastLaunchInfo};

/// Launch readout text component
#[derive(Component)]
pub struct LaunchText;

pub const HELP_TEXT: &str = "Hold and release the left mouse button to launch  |  R: reset  |  Esc: quit";

/// Format the HUD lines. Split out so it can be tested without a window.
pub fn format_launch_text(
    aim_angle: Option<f32>,
    charge: &DragCharge,
    last: &LastLaunchInfo,
    airborne: bool,
) -> String {
    let mut lines = Vec::new();

    match aim_angle {
        Some(angle) => lines.push(format!("Aim: {:.1}°", angle)),
        None => lines.push("Aim: ---".to_string()),
    }
    if charge.active {
        lines.push(format!("Drag: {:.2}s", charge.charge_time));
    }

    if last.drag_secs > 0.0 || last.speed > 0.0 {
        lines.push(format!(
            "Last: {:.1}° {:.2}s  v=({:.1}, {:.1})",
            last.angle_degrees, last.drag_secs, last.velocity.x, last.velocity.y
        ));
        if let Some(summary) = &last.summary {
            lines.push(format!(
                "Range {:.0}  Apex {:.0}  Flight {:.2}s",
                summary.range, summary.apex_height, summary.real_time
            ));
        }
    }
    if airborne {
        lines.push("In flight".to_string());
    }

    lines.join("\n")
}

/// Update launch readout
pub fn update_launch_text(
    input: Res<LaunchInput>,
    charge: Res<DragCharge>,
    last: Res<LastLaunchInfo>,
    ball_query: Query<(&Transform, &BallFlight), With<Ball>>,
    mut text_query: Query<&mut Text, With<LaunchText>>,
) {
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };
    let Ok((ball_transform, flight)) = ball_query.single() else {
        return;
    };

    let aim_angle = input
        .cursor
        .map(|cursor| launch_angle(ball_transform.translation.truncate(), cursor));

    text.0 = format_launch_text(aim_angle, &charge, &last, flight.is_airborne());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projectile::FlightSummary;

    #[test]
    fn test_format_before_any_launch() {
        let text = format_launch_text(None, &DragCharge::default(), &LastLaunchInfo::default(), false);
        assert_eq!(text, "Aim: ---");
    }

    #[test]
    fn test_format_with_launch() {
        let last = LastLaunchInfo {
            angle_degrees: 45.0,
            drag_secs: 1.5,
            speed: 75.0,
            velocity: Vec2::new(53.0, 53.0),
            start: Vec2::ZERO,
            summary: Some(FlightSummary {
                flight_time: 10.0,
                real_time: 2.5,
                apex_height: 140.0,
                range: 530.0,
                landing: (530.0, 0.0),
            }),
        };
        let charge = DragCharge {
            active: true,
            charge_time: 0.5,
        };
        let text = format_launch_text(Some(30.0), &charge, &last, true);
        assert!(text.contains("Aim: 30.0°"), "{}", text);
        assert!(text.contains("Drag: 0.50s"), "{}", text);
        assert!(text.contains("Range 530"), "{}", text);
        assert!(text.ends_with("In flight"), "{}", text);
    }
}
