use crate::constants::LINE_ALPHA_MAX;
use crate::sim::Particle;
use glam::Vec2;
use smallvec::SmallVec;

// A cell rarely holds more than a few particles; buckets stay inline.
type Bucket = SmallVec<[u32; 4]>;

/// Uniform grid over the viewport, rebuilt from scratch every rendered frame.
///
/// The cell size equals the maximum link distance, so any pair within that
/// distance shares a cell or sits in directly adjacent cells and the 3×3
/// neighborhood query is complete.
pub struct SpatialGrid {
    cols: usize,
    rows: usize,
    cell: f32,
    cells: Vec<Bucket>,
}

impl SpatialGrid {
    pub fn build(particles: &[Particle], cell: f32, width: f32, height: f32) -> Self {
        let cols = ((width / cell).ceil() as usize).max(1);
        let rows = ((height / cell).ceil() as usize).max(1);
        let mut grid = Self {
            cols,
            rows,
            cell,
            cells: vec![Bucket::new(); cols * rows],
        };
        for (i, p) in particles.iter().enumerate() {
            let (cx, cy) = grid.cell_of(p.pos);
            grid.cells[cy * cols + cx].push(i as u32);
        }
        grid
    }

    // Clamped, so a marginally out-of-bounds position still lands in a cell.
    fn cell_of(&self, pos: Vec2) -> (usize, usize) {
        let cx = ((pos.x / self.cell).floor() as isize).clamp(0, self.cols as isize - 1);
        let cy = ((pos.y / self.cell).floor() as isize).clamp(0, self.rows as isize - 1);
        (cx as usize, cy as usize)
    }

    /// Visit every candidate pair `(i, j, distance)` with `j > i`, drawn from
    /// the 3×3 block of cells around `i`'s cell. No distance filter; the
    /// strict-greater rule rules out self pairs and duplicates.
    pub fn for_each_neighbor_pair(
        &self,
        particles: &[Particle],
        mut f: impl FnMut(usize, usize, f32),
    ) {
        for (i, p) in particles.iter().enumerate() {
            let (cx, cy) = self.cell_of(p.pos);
            for oy in -1i32..=1 {
                for ox in -1i32..=1 {
                    let nx = cx as isize + ox as isize;
                    let ny = cy as isize + oy as isize;
                    if nx < 0 || ny < 0 || nx >= self.cols as isize || ny >= self.rows as isize {
                        continue;
                    }
                    for &j in &self.cells[ny as usize * self.cols + nx as usize] {
                        let j = j as usize;
                        if j <= i {
                            continue;
                        }
                        f(i, j, p.pos.distance(particles[j].pos));
                    }
                }
            }
        }
    }

    /// Candidate pairs closer than `max_dist`, the ones that get a link.
    pub fn for_each_link(
        &self,
        particles: &[Particle],
        max_dist: f32,
        mut f: impl FnMut(usize, usize, f32),
    ) {
        self.for_each_neighbor_pair(particles, |i, j, dist| {
            if dist < max_dist {
                f(i, j, dist);
            }
        });
    }
}

/// Link opacity: maximum at distance zero, falling linearly to zero at
/// `max_dist`. A pure function of the distance, so repainting the same field
/// yields the same frame.
#[inline]
pub fn link_alpha(dist: f32, max_dist: f32) -> f32 {
    (1.0 - dist / max_dist) * LINE_ALPHA_MAX
}
