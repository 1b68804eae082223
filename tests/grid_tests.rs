// Host-side tests for the spatial index and link math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]

mod constants {
    include!("../src/constants.rs");
}
mod sim {
    include!("../src/sim.rs");
}
mod grid {
    include!("../src/grid.rs");
}

use glam::Vec2;
use grid::{link_alpha, SpatialGrid};
use rand::prelude::*;
use sim::Particle;
use std::collections::HashSet;

fn particle(x: f32, y: f32) -> Particle {
    Particle {
        pos: Vec2::new(x, y),
        vel: Vec2::ZERO,
        radius: 1.0,
    }
}

#[test]
fn neighbor_search_finds_every_close_pair() {
    let (w, h) = (900.0, 700.0);
    let cell = constants::MAX_LINK_DIST;
    let mut rng = StdRng::seed_from_u64(11);
    let particles: Vec<Particle> = (0..200)
        .map(|_| particle(rng.gen_range(0.0..w), rng.gen_range(0.0..h)))
        .collect();

    let grid = SpatialGrid::build(&particles, cell, w, h);
    let mut candidates = HashSet::new();
    grid.for_each_neighbor_pair(&particles, |i, j, _| {
        candidates.insert((i, j));
    });

    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            if particles[i].pos.distance(particles[j].pos) <= cell {
                assert!(candidates.contains(&(i, j)), "missed pair ({i}, {j})");
            }
        }
    }
}

#[test]
fn pairs_are_unique_and_never_self() {
    let (w, h) = (500.0, 500.0);
    let mut rng = StdRng::seed_from_u64(23);
    let particles: Vec<Particle> = (0..150)
        .map(|_| particle(rng.gen_range(0.0..w), rng.gen_range(0.0..h)))
        .collect();

    let grid = SpatialGrid::build(&particles, constants::MAX_LINK_DIST, w, h);
    let mut seen = Vec::new();
    grid.for_each_neighbor_pair(&particles, |i, j, _| {
        assert!(j > i);
        seen.push((i, j));
    });
    let unique: HashSet<_> = seen.iter().copied().collect();
    assert_eq!(unique.len(), seen.len());
}

#[test]
fn out_of_bounds_positions_are_clamped_into_the_grid() {
    let particles = vec![particle(-3.0, -3.0), particle(2.0, 2.0)];
    let grid = SpatialGrid::build(&particles, constants::MAX_LINK_DIST, 400.0, 300.0);
    let mut found = false;
    grid.for_each_neighbor_pair(&particles, |i, j, _| {
        found |= (i, j) == (0, 1);
    });
    assert!(found);
}

#[test]
fn adjacent_cell_scenario_links_with_expected_alpha() {
    let particles = vec![particle(0.0, 0.0), particle(50.0, 0.0)];
    let grid = SpatialGrid::build(&particles, 110.0, 500.0, 300.0);
    let mut links = Vec::new();
    grid.for_each_link(&particles, 110.0, |i, j, dist| links.push((i, j, dist)));

    assert_eq!(links.len(), 1);
    let (i, j, dist) = links[0];
    assert_eq!((i, j), (0, 1));
    assert!((dist - 50.0).abs() < 1e-5);
    assert!((link_alpha(dist, 110.0) - 0.327).abs() < 1e-3);
}

#[test]
fn candidates_beyond_link_distance_get_no_link() {
    let particles = vec![particle(0.0, 0.0), particle(120.0, 0.0)];
    let grid = SpatialGrid::build(&particles, 110.0, 500.0, 300.0);

    let mut candidates = 0;
    grid.for_each_neighbor_pair(&particles, |_, _, _| candidates += 1);
    assert_eq!(candidates, 1);

    let mut links = 0;
    grid.for_each_link(&particles, 110.0, |_, _, _| links += 1);
    assert_eq!(links, 0);
}

#[test]
fn alpha_ramp_endpoints() {
    assert!((link_alpha(0.0, 110.0) - constants::LINE_ALPHA_MAX).abs() < 1e-6);
    assert!(link_alpha(110.0, 110.0).abs() < 1e-6);
}
