// Host-side tests for the laser-burst geometry and phases.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod rays {
    include!("../src/core/rays.rs");
}

use rays::*;

#[test]
fn eight_rays_at_forty_five_degree_steps() {
    assert_eq!(RAY_COUNT, 8);
    for i in 0..RAY_COUNT {
        assert_eq!(ray_angle_deg(i), 45.0 * i as f64);
    }
}

#[test]
fn lifetime_covers_both_phases() {
    assert!(EXPAND_MS + FADE_MS <= LIFETIME_MS);
}

#[test]
fn interactive_controls_are_guarded() {
    for tag in ["INPUT", "BUTTON", "A", "TEXTAREA", "SELECT"] {
        assert!(is_interactive_tag(tag));
        assert!(is_interactive_tag(&tag.to_ascii_lowercase()));
    }
    assert!(!is_interactive_tag("DIV"));
    assert!(!is_interactive_tag("svg"));
    assert!(!is_interactive_tag("circle"));
}

#[test]
fn phase_transforms_scale_the_beam() {
    let spawn = spawn_transform(90.0);
    assert!(spawn.contains("rotate(90deg)"));
    assert!(spawn.contains("scaleY(0.05)"));
    assert!(expand_transform(90.0).contains("scaleY(1)"));
    let fade = fade_transform(90.0);
    assert!(fade.contains("scaleY(1.1)"));
    assert!(fade.contains("scaleX(1.1)"));
}
