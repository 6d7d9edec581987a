// Host-side tests for the astronaut gaze and rover tracking math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod gaze {
    include!("../src/core/gaze.rs");
}
mod rover {
    include!("../src/core/rover.rs");
}

use gaze::*;

#[test]
fn head_angle_is_clamped_for_any_pointer() {
    let mut dx = -500.0;
    while dx <= 500.0 {
        let mut dy = -500.0;
        while dy <= 500.0 {
            let a = head_angle_deg(dx, dy);
            assert!((-MAX_ROTATION_DEG..=MAX_ROTATION_DEG).contains(&a));
            dy += 50.0;
        }
        dx += 50.0;
    }
}

#[test]
fn head_angle_cardinal_directions() {
    // pointer to the left of the body: the head rests level
    assert!(head_angle_deg(-100.0, 0.0).abs() < 1e-9);
    // pointer to the right at eye level: atan2(-0, -x) lands on -180, so the
    // clamp pins the head at the minimum
    assert_eq!(head_angle_deg(100.0, 0.0), -MAX_ROTATION_DEG);
    // nudge the pointer a hair above and the raw angle flips to ~+180
    assert_eq!(head_angle_deg(100.0, -0.1), MAX_ROTATION_DEG);
    // pointer straight below: raw -90, clamped to the min
    assert_eq!(head_angle_deg(0.0, 100.0), -MAX_ROTATION_DEG);
}

#[test]
fn moving_up_shifts_the_head_left() {
    let mut s = GazeState::new();
    s.step_offsets(100.0);
    s.step_offsets(50.0); // cursor moved up 50px
    assert!((s.offset_x - -2.0).abs() < 1e-9);
    assert!(s.offset_y.abs() < 1e-9);
}

#[test]
fn moving_down_shifts_the_head_up() {
    let mut s = GazeState::new();
    s.step_offsets(100.0);
    s.step_offsets(200.0); // cursor moved down 100px
    assert!(s.offset_x.abs() < 1e-9);
    assert!((s.offset_y - -4.0).abs() < 1e-9);
}

#[test]
fn offsets_converge_inside_their_clamps() {
    let mut s = GazeState::new();
    let mut y = 10_000.0;
    for _ in 0..100 {
        s.step_offsets(y);
        y -= 1000.0; // sustained upward motion
        assert!(s.offset_x >= -5.0 - 1e-9);
        assert!(s.offset_x <= 0.0);
    }
}

#[test]
fn grab_respects_the_cooldown() {
    let mut s = GazeState::new();
    assert!(s.try_grab(0.0, 10.0));
    assert!(!s.try_grab(400.0, 10.0));
    assert!(!s.try_grab(799.0, 10.0));
    assert!(s.try_grab(GRAB_COOLDOWN_MS, 10.0));
    assert!(!s.try_grab(GRAB_COOLDOWN_MS + 1.0, 10.0));
}

#[test]
fn a_miss_does_not_arm_the_cooldown() {
    let mut s = GazeState::new();
    assert!(!s.try_grab(0.0, GRAB_DISTANCE_PX + 20.0));
    assert!(s.try_grab(1.0, GRAB_DISTANCE_PX - 20.0));
}

#[test]
fn rover_head_follows_at_a_quarter_angle() {
    assert!((rover::head_angle_deg(100.0, 100.0) - 11.25).abs() < 1e-9);
    assert!((rover::head_angle_deg(100.0, 0.0)).abs() < 1e-9);
}

#[test]
fn rover_eye_stays_in_its_socket() {
    assert_eq!(rover::eye_offset(1000.0, 1000.0), (4.0, 4.0));
    assert_eq!(rover::eye_offset(-1000.0, -1000.0), (-4.0, -2.0));
    assert_eq!(rover::eye_offset(50.0, -50.0), (1.0, -1.0));
}

#[test]
fn blink_roll_threshold() {
    assert!(rover::should_blink(0.05));
    assert!(!rover::should_blink(rover::BLINK_CHANCE));
    assert!(!rover::should_blink(0.9));
}
