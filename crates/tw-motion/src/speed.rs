//! Per-frame walking speed.

use tw_core::{MovementTuning, Vec3};

/// Speed for one frame of movement along `direction`.
///
/// Axis-aligned world directions (a grid diagonal on an isometric map) get
/// `straight_speed`; everything else gets `base_speed`.  When the agent is
/// `drop` world units above its target and that exceeds one tile level
/// (`level_height`), the speed is scaled by
/// `1 + (downward_acceleration − 1) · drop / level_height` and capped at
/// `max_fall_speed`.
pub fn step_speed(tuning: &MovementTuning, direction: Vec3, drop: f64, level_height: f64) -> f64 {
    let mut speed = if direction.x == 0.0 || direction.y == 0.0 {
        tuning.straight_speed
    } else {
        tuning.base_speed
    };
    if drop > level_height {
        speed *= 1.0 + (tuning.downward_acceleration - 1.0) * (drop / level_height);
        speed = speed.min(tuning.max_fall_speed);
    }
    speed
}
