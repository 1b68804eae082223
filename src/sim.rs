use crate::constants::{
    CURSOR_ATTRACT_COUNT, CURSOR_ATTRACT_FACTOR, RADIUS_MAX, RADIUS_MIN, VEL_RANGE,
};
use glam::Vec2;
use rand::prelude::*;

/// A single moving point in the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Owns every particle plus the extents they move in.
///
/// Identity is the index into `particles`; a resize regenerates the whole
/// vector, so indices must not be held across one.
pub struct Constellation {
    pub particles: Vec<Particle>,
    pub width: f32,
    pub height: f32,
    rng: StdRng,
}

impl Constellation {
    /// A fixed seed reproduces the same field.
    pub fn new(width: f32, height: f32, count: usize, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            width,
            height,
            rng: StdRng::seed_from_u64(seed),
        };
        field.resize(width, height, count);
        field
    }

    /// Discard all particles and generate `count` fresh ones for the new
    /// extents. Motion is not preserved across a resize.
    pub fn resize(&mut self, width: f32, height: f32, count: usize) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle {
                pos: Vec2::new(
                    self.rng.gen_range(0.0..=width),
                    self.rng.gen_range(0.0..=height),
                ),
                vel: Vec2::new(
                    self.rng.gen_range(-VEL_RANGE..=VEL_RANGE),
                    self.rng.gen_range(-VEL_RANGE..=VEL_RANGE),
                ),
                radius: self.rng.gen_range(RADIUS_MIN..=RADIUS_MAX),
            });
        }
    }

    /// Advance one simulation tick: integrate, reflect off the extents, then
    /// nudge a small random subset toward the pointer.
    pub fn step(&mut self, pointer: Vec2) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < 0.0 {
                p.pos.x = -p.pos.x;
                p.vel.x = p.vel.x.abs();
            } else if p.pos.x > w {
                p.pos.x = 2.0 * w - p.pos.x;
                p.vel.x = -p.vel.x.abs();
            }
            if p.pos.y < 0.0 {
                p.pos.y = -p.pos.y;
                p.vel.y = p.vel.y.abs();
            } else if p.pos.y > h {
                p.pos.y = 2.0 * h - p.pos.y;
                p.vel.y = -p.vel.y.abs();
            }
        }

        if self.particles.is_empty() {
            return;
        }
        // A pointer recorded before a resize may lie outside the extents.
        let target = pointer.clamp(Vec2::ZERO, Vec2::new(w, h));
        for _ in 0..CURSOR_ATTRACT_COUNT {
            let i = self.rng.gen_range(0..self.particles.len());
            let p = &mut self.particles[i];
            p.pos += (target - p.pos) * CURSOR_ATTRACT_FACTOR;
        }
    }
}
