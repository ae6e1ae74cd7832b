//! Charge gauge drawn above the ball while dragging

use bevy::prelude::*;

use crate::ball::Ball;
use crate::constants::*;
use crate::shooting::DragCharge;
use crate::tuning::LaunchTuning;

/// Fill color: green (0%) -> red (100%)
pub fn charge_color(charge_pct: f32) -> Color {
    let r = charge_pct * 0.9;
    let g = (1.0 - charge_pct) * 0.8;
    Color::srgb(r, g, 0.0)
}

/// Draw the gauge outline and a fill proportional to drag power
pub fn draw_charge_gauge(
    mut gizmos: Gizmos,
    charge: Res<DragCharge>,
    tuning: Res<LaunchTuning>,
    ball_query: Query<&Transform, With<Ball>>,
) {
    if !charge.active {
        return;
    }
    let Ok(ball_transform) = ball_query.single() else {
        return;
    };

    let center = ball_transform.translation.truncate() + Vec2::new(0.0, CHARGE_GAUGE_OFFSET);
    let size = Vec2::new(CHARGE_GAUGE_WIDTH, CHARGE_GAUGE_HEIGHT);
    gizmos.rect_2d(center, size, TEXT_SECONDARY);

    let charge_pct = charge.charge_pct(&tuning);
    if charge_pct <= 0.0 {
        return;
    }

    // Fill grows from the left edge, one horizontal line per pixel row
    let left = center.x - CHARGE_GAUGE_WIDTH / 2.0;
    let right = left + CHARGE_GAUGE_WIDTH * charge_pct;
    let color = charge_color(charge_pct);
    let rows = CHARGE_GAUGE_HEIGHT as i32 - 2;
    for row in 0..rows {
        let y = center.y - CHARGE_GAUGE_HEIGHT / 2.0 + 1.0 + row as f32 + 0.5;
        gizmos.line_2d(Vec2::new(left, y), Vec2::new(right, y), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_color_endpoints() {
        let empty = charge_color(0.0).to_srgba();
        assert_eq!((empty.red, empty.green), (0.0, 0.8));
        let full = charge_color(1.0).to_srgba();
        assert_eq!((full.red, full.green), (0.9, 0.0));
    }
}
