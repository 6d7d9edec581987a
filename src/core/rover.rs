// Rover head/eye tracking math and the blink schedule.

/// The head follows the pointer at a quarter of the raw angle.
pub const HEAD_ANGLE_FACTOR: f64 = 0.25;

// Visual center of the rover within its bounding box.
pub const CENTER_X_FRACTION: f64 = 0.5;
pub const CENTER_Y_FRACTION: f64 = 0.45;

// Eye marker geometry (SVG circle attributes).
pub const EYE_REST_CX: f64 = 0.0;
pub const EYE_REST_CY: f64 = 10.0;
pub const EYE_REST_R: f64 = 8.0;
pub const EYE_BLINK_R: f64 = 4.5;

pub const BLINK_RESTORE_MS: i32 = 160;
pub const BLINK_INTERVAL_MS: i32 = 2200;
pub const BLINK_CHANCE: f64 = 0.08;

pub fn head_angle_deg(dx: f64, dy: f64) -> f64 {
    dy.atan2(dx).to_degrees() * HEAD_ANGLE_FACTOR
}

/// Eye displacement toward the pointer, clamped to stay inside the socket.
/// The vertical clamp is asymmetric: the eye drops further than it rises.
pub fn eye_offset(dx: f64, dy: f64) -> (f64, f64) {
    ((dx / 50.0).clamp(-4.0, 4.0), (dy / 50.0).clamp(-2.0, 4.0))
}

pub fn should_blink(roll: f64) -> bool {
    roll < BLINK_CHANCE
}
