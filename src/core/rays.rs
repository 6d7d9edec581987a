// Radial laser-burst geometry and animation phases. Kept free of DOM types so
// the burst contract can be tested host-side.

/// Rays per burst; angles are spaced `360 / RAY_COUNT` degrees apart.
pub const RAY_COUNT: usize = 8;

// Two-phase animation: eased expansion, then a linear fade-out that keeps
// growing slightly. The element must be gone once the lifetime elapses.
pub const EXPAND_MS: i32 = 220;
pub const FADE_MS: i32 = 250;
pub const LIFETIME_MS: i32 = 500;
pub const EXPAND_EASING: &str = "cubic-bezier(0.2, 0.9, 0.3, 1)";

// Clicks on these keep their normal behavior.
const INTERACTIVE_TAGS: [&str; 5] = ["INPUT", "BUTTON", "A", "TEXTAREA", "SELECT"];

pub fn is_interactive_tag(tag: &str) -> bool {
    INTERACTIVE_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t))
}

pub fn ray_angle_deg(index: usize) -> f64 {
    (360.0 / RAY_COUNT as f64) * index as f64
}

fn ray_transform(angle_deg: f64, scale_y: f64, scale_x: f64) -> String {
    format!(
        "translate(-50%, -50%) rotate({angle_deg}deg) translateY(-18px) scaleY({scale_y}) scaleX({scale_x})"
    )
}

/// Collapsed state a ray is inserted with.
pub fn spawn_transform(angle_deg: f64) -> String {
    ray_transform(angle_deg, 0.05, 1.0)
}

/// Full-length state the expansion phase eases toward.
pub fn expand_transform(angle_deg: f64) -> String {
    ray_transform(angle_deg, 1.0, 1.0)
}

/// Slightly overgrown state the fade-out phase ends on.
pub fn fade_transform(angle_deg: f64) -> String {
    ray_transform(angle_deg, 1.1, 1.1)
}
