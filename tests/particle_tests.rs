// Host-side tests for the pure dust-field simulation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod particles {
    include!("../src/core/particles.rs");
}

use glam::Vec2;
use particles::*;

#[test]
fn count_scales_with_viewport_area() {
    assert_eq!(particle_count(1000.0, 800.0), 50);
    assert_eq!(particle_count(0.0, 0.0), BASE_COUNT);
    assert_eq!(particle_count(1920.0, 1080.0), 51 + BASE_COUNT);
}

#[test]
fn spawn_respects_viewport_and_tuning_ranges() {
    let field = ParticleField::new(1200.0, 800.0, 7);
    assert_eq!(field.particles.len(), particle_count(1200.0, 800.0));
    for p in &field.particles {
        assert!((0.0..1200.0).contains(&p.pos.x));
        assert!((0.0..800.0).contains(&p.pos.y));
        assert!((-0.2..0.2).contains(&p.vel.x));
        assert!((-0.1..0.5).contains(&p.vel.y));
        assert!((0.4..2.4).contains(&p.size));
        assert!((0.08..0.26).contains(&p.alpha));
    }
}

#[test]
fn step_advances_by_velocity() {
    let mut field = ParticleField::new(800.0, 600.0, 1);
    field.particles[0].pos = Vec2::new(100.0, 100.0);
    field.particles[0].vel = Vec2::new(0.15, -0.05);
    field.step();
    assert!((field.particles[0].pos.x - 100.15).abs() < 1e-5);
    assert!((field.particles[0].pos.y - 99.95).abs() < 1e-5);
}

#[test]
fn motes_wrap_past_the_margins() {
    let mut field = ParticleField::new(800.0, 600.0, 1);
    field.particles[0].pos = Vec2::new(-20.5, 100.0);
    field.particles[0].vel = Vec2::ZERO;
    field.particles[1].pos = Vec2::new(100.0, 620.5);
    field.particles[1].vel = Vec2::ZERO;
    field.step();
    assert_eq!(field.particles[0].pos.x, 800.0 + WRAP_MARGIN);
    assert_eq!(field.particles[1].pos.y, -WRAP_MARGIN);
}

#[test]
fn same_seed_reproduces_the_field() {
    let a = ParticleField::new(1024.0, 768.0, 99);
    let b = ParticleField::new(1024.0, 768.0, 99);
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.vel, pb.vel);
        assert_eq!(pa.size, pb.size);
        assert_eq!(pa.alpha, pb.alpha);
    }
}
