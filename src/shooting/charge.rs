//! Drag charge tracking

use bevy::prelude::*;

use crate::input::LaunchInput;
use crate::tuning::LaunchTuning;

/// How long the mouse has been held for the current drag
#[derive(Resource, Default, Debug)]
pub struct DragCharge {
    pub active: bool,
    pub charge_time: f32,
}

impl DragCharge {
    /// Charge as a fraction of the drag cap (0.0 to 1.0).
    /// With no cap, saturates at one second.
    pub fn charge_pct(&self, tuning: &LaunchTuning) -> f32 {
        let full = if tuning.max_drag_secs > 0.0 {
            tuning.max_drag_secs
        } else {
            1.0
        };
        (self.charge_time / full).clamp(0.0, 1.0)
    }
}

/// Mirror the held drag into DragCharge for the gauge
pub fn update_drag_charge(
    time: Res<Time>,
    tuning: Res<LaunchTuning>,
    input: Res<LaunchInput>,
    mut charge: ResMut<DragCharge>,
) {
    match input.drag_secs(time.elapsed_secs_f64()) {
        Some(drag) => {
            charge.active = true;
            charge.charge_time = tuning.clamp_drag(drag);
        }
        None => {
            charge.active = false;
            charge.charge_time = 0.0;
        }
    }
}
