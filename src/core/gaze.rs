// Pure math for the astronaut's cursor-tracking head and its grab reflex.

/// How close the cursor must be to the body center to provoke a grab.
pub const GRAB_DISTANCE_PX: f64 = 180.0;
/// Minimum spacing between two grab animations.
pub const GRAB_COOLDOWN_MS: f64 = 800.0;
/// How long the arm's grab animation runs before its class is cleared.
pub const GRAB_ANIM_MS: i32 = 600;
/// Head rotation clamp, degrees in each direction.
pub const MAX_ROTATION_DEG: f64 = 45.0;

// Body center relative to the astronaut's bounding box; the figure sits in
// the bottom-right corner of the page.
pub const BODY_CENTER_FROM_RIGHT_PX: f64 = 120.0;
pub const BODY_CENTER_FROM_BOTTOM_PX: f64 = 140.0;

// Vertical-velocity micro-offsets: moving up nudges the head left, moving
// down nudges it up, both smoothed and clamped to a few pixels.
const OFFSET_FACTOR: f64 = 0.1;
const MAX_SHIFT_X_PX: f64 = 5.0;
const MAX_SHIFT_Y_PX: f64 = 10.0;
const SMOOTHING_KEEP: f64 = 0.6;
const SMOOTHING_BLEND: f64 = 0.4;

/// Head rotation toward the pointer, clamped. `dx`/`dy` point from the body
/// center to the pointer; the sprite faces away from it, hence the negation.
pub fn head_angle_deg(dx: f64, dy: f64) -> f64 {
    let angle = (-dy).atan2(-dx).to_degrees();
    angle.clamp(-MAX_ROTATION_DEG, MAX_ROTATION_DEG)
}

#[derive(Default)]
pub struct GazeState {
    pub offset_x: f64,
    pub offset_y: f64,
    prev_y: Option<f64>,
    last_grab_ms: Option<f64>,
}

impl GazeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one pointer position into the smoothed micro-offsets.
    pub fn step_offsets(&mut self, mouse_y: f64) {
        let delta_y = match self.prev_y {
            Some(prev) => mouse_y - prev,
            None => 0.0,
        };
        self.prev_y = Some(mouse_y);

        let (target_x, target_y) = if delta_y < 0.0 {
            ((delta_y * OFFSET_FACTOR).max(-MAX_SHIFT_X_PX), 0.0)
        } else if delta_y > 0.0 {
            (0.0, (-delta_y * OFFSET_FACTOR).max(-MAX_SHIFT_Y_PX))
        } else {
            (0.0, 0.0)
        };
        self.offset_x = self.offset_x * SMOOTHING_KEEP + target_x * SMOOTHING_BLEND;
        self.offset_y = self.offset_y * SMOOTHING_KEEP + target_y * SMOOTHING_BLEND;
    }

    /// True when a grab should fire: pointer inside the reach radius and the
    /// cooldown has elapsed. Firing re-arms the cooldown; a miss does not.
    pub fn try_grab(&mut self, now_ms: f64, dist_px: f64) -> bool {
        if let Some(last) = self.last_grab_ms {
            if now_ms - last < GRAB_COOLDOWN_MS {
                return false;
            }
        }
        if dist_px < GRAB_DISTANCE_PX {
            self.last_grab_ms = Some(now_ms);
            return true;
        }
        false
    }
}
