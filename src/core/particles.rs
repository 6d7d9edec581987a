// Drifting dust field advected over the viewport.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One soft-glow dust mote.
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub alpha: f32,
}

/// One mote per this many square CSS pixels, on top of a fixed floor.
pub const AREA_PER_PARTICLE: f32 = 40_000.0;
pub const BASE_COUNT: usize = 30;

/// Motes wrap once they drift this far past a viewport edge.
pub const WRAP_MARGIN: f32 = 20.0;

pub fn particle_count(width: f32, height: f32) -> usize {
    (width * height / AREA_PER_PARTICLE) as usize + BASE_COUNT
}

pub struct ParticleField {
    pub width: f32,
    pub height: f32,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..particle_count(width, height))
            .map(|_| Particle {
                pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                vel: Vec2::new(
                    rng.gen::<f32>() * 0.4 - 0.2,
                    rng.gen::<f32>() * 0.6 - 0.1,
                ),
                size: rng.gen::<f32>() * 2.0 + 0.4,
                alpha: 0.08 + rng.gen::<f32>() * 0.18,
            })
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    /// Advect every mote by its velocity, wrapping just past the edges.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < -WRAP_MARGIN {
                p.pos.x = self.width + WRAP_MARGIN;
            }
            if p.pos.x > self.width + WRAP_MARGIN {
                p.pos.x = -WRAP_MARGIN;
            }
            if p.pos.y < -WRAP_MARGIN {
                p.pos.y = self.height + WRAP_MARGIN;
            }
            if p.pos.y > self.height + WRAP_MARGIN {
                p.pos.y = -WRAP_MARGIN;
            }
        }
    }
}
