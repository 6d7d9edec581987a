// Host-side tests for the pure telemetry simulation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod telemetry {
    include!("../src/core/telemetry.rs");
}

use telemetry::*;

#[test]
fn sensor_window_is_fifo_with_cap() {
    let mut sim = TelemetrySim::new(1);
    for i in 0..=SENSOR_WINDOW {
        sim.push_sample(i as f64);
    }
    assert_eq!(sim.samples.len(), SENSOR_WINDOW);
    // the very first sample (0.0) was evicted by the 71st append
    assert_eq!(*sim.samples.front().unwrap(), 1.0);
    assert_eq!(*sim.samples.back().unwrap(), SENSOR_WINDOW as f64);
}

#[test]
fn window_never_exceeds_cap_under_continuous_ticks() {
    let mut sim = TelemetrySim::new(2);
    for i in 0..300 {
        sim.tick(i as f64 * SENSOR_INTERVAL_MS, false);
        assert!(sim.samples.len() <= SENSOR_WINDOW);
    }
    assert_eq!(sim.samples.len(), SENSOR_WINDOW);
}

#[test]
fn sensor_values_stay_in_chart_range() {
    let mut sim = TelemetrySim::new(3);
    for i in 0..500 {
        sim.tick(i as f64 * SENSOR_INTERVAL_MS, false);
    }
    assert!(sim.samples.iter().all(|v| (0.0..=100.0).contains(v)));
}

#[test]
fn transmission_changes_respect_interval() {
    let mut sim = TelemetrySim::new(4);
    assert!(sim.tick(0.0, false).tx.is_some());
    assert!(sim.tick(1000.0, false).tx.is_none());
    assert!(sim.tick(TX_INTERVAL_MS - 1.0, false).tx.is_none());
    assert!(sim.tick(TX_INTERVAL_MS, false).tx.is_some());
}

#[test]
fn transmission_is_always_a_known_state() {
    let mut sim = TelemetrySim::new(5);
    for i in 0..50 {
        if let Some(tx) = sim.tick(i as f64 * TX_INTERVAL_MS, false).tx {
            assert!(TX_STATES.contains(&tx));
        }
    }
}

#[test]
fn coords_refresh_gating_follows_reduced_motion() {
    let mut sim = TelemetrySim::new(6);
    assert!(sim.tick(0.0, true).coords.is_some());
    assert!(sim.tick(500.0, true).coords.is_none());
    assert!(sim.tick(COORDS_INTERVAL_REDUCED_MS, true).coords.is_some());

    let mut sim = TelemetrySim::new(6);
    assert!(sim.tick(0.0, false).coords.is_some());
    assert!(sim.tick(100.0, false).coords.is_none());
    assert!(sim.tick(COORDS_INTERVAL_MS, false).coords.is_some());
}

#[test]
fn coords_follow_the_three_sinusoids() {
    let (x, y, z) = coords_at(0.0);
    assert!(x.abs() < 1e-9);
    assert!((y - 90.0).abs() < 1e-9);
    assert!(z.abs() < 1e-9);

    let (x, y, z) = coords_at(10_000.0);
    assert!((x - (10.0f64 * 0.13).sin() * 180.0).abs() < 1e-9);
    assert!((y - (10.0f64 * 0.07).cos() * 90.0).abs() < 1e-9);
    assert!((z - (10.0f64 * 0.19).sin() * 1000.0).abs() < 1e-9);
}

#[test]
fn coords_format_to_three_decimals() {
    assert_eq!(
        format_coords(1.23456, -2.0, 3.14159),
        "1.235 , -2.000 , 3.142"
    );
}

#[test]
fn status_display_joins_label_and_hint() {
    assert_eq!(TX_STATES[0].display(), "ONLINE · Enlace estable");
    assert_eq!(TX_UNKNOWN.display(), "DESCONOCIDA");
    assert_eq!(display_status("WEAK", ""), "WEAK");
}

#[test]
fn same_seed_gives_same_status_sequence() {
    let mut a = TelemetrySim::new(42);
    let mut b = TelemetrySim::new(42);
    for i in 0..20 {
        let now = i as f64 * TX_INTERVAL_MS;
        assert_eq!(a.tick(now, false).tx, b.tick(now, false).tx);
    }
}

#[test]
fn average_is_over_the_current_window() {
    let mut sim = TelemetrySim::new(7);
    assert_eq!(sim.average(), 0.0);
    sim.push_sample(10.0);
    sim.push_sample(20.0);
    sim.push_sample(30.0);
    assert!((sim.average() - 20.0).abs() < 1e-9);
}
