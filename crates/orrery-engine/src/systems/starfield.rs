//! Drifting background starfield.
//!
//! Positions and velocities live in two parallel flat `f32` buffers
//! (`[x0, y0, z0, x1, y1, z1, ...]`) so the position buffer can be handed to
//! the renderer as-is.

use crate::systems::rng::Rng;

/// Per-axis velocity range is `[-MAX_SPEED / 2, MAX_SPEED / 2]`.
pub const MAX_SPEED: f32 = 0.5;

/// Any coordinate whose magnitude exceeds this is re-rolled inside
/// `[-WRAP_LIMIT, WRAP_LIMIT]`. Independent of the spawn bound.
pub const WRAP_LIMIT: f32 = 1000.0;

/// Fixed-size buffer of drifting stars.
#[derive(Debug, Clone, Default)]
pub struct StarField {
    positions: Vec<f32>,
    velocities: Vec<f32>,
    dirty: bool,
}

impl StarField {
    /// Allocate `count` stars uniformly inside `[-bound, bound]^3`.
    pub fn initialize(count: usize, bound: f32, rng: &mut Rng) -> Self {
        let mut positions = Vec::with_capacity(count * 3);
        let mut velocities = Vec::with_capacity(count * 3);
        for _ in 0..count {
            for _ in 0..3 {
                positions.push(rng.symmetric(bound));
            }
            for _ in 0..3 {
                velocities.push(rng.symmetric(MAX_SPEED / 2.0));
            }
        }
        Self {
            positions,
            velocities,
            dirty: true,
        }
    }

    /// Advance every star by its velocity, then wrap each out-of-range axis.
    pub fn tick(&mut self, rng: &mut Rng) {
        for (p, v) in self.positions.iter_mut().zip(&self.velocities) {
            *p += *v;
            if p.abs() > WRAP_LIMIT {
                *p = rng.symmetric(WRAP_LIMIT);
            }
        }
        self.dirty = true;
    }

    /// Number of stars.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat position buffer, three floats per star.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat velocity buffer, three floats per star.
    pub fn velocities(&self) -> &[f32] {
        &self.velocities
    }

    /// Report and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Raw pointer to position data for shared-buffer reads.
    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_star(position: [f32; 3], velocity: [f32; 3]) -> StarField {
        StarField {
            positions: position.to_vec(),
            velocities: velocity.to_vec(),
            dirty: true,
        }
    }

    #[test]
    fn initialize_respects_bounds_and_speed() {
        let mut rng = Rng::new(1);
        let field = StarField::initialize(3000, 1000.0, &mut rng);
        assert_eq!(field.len(), 3000);
        assert!(field.positions().iter().all(|c| c.abs() <= 1000.0));
        assert!(field.velocities().iter().all(|v| v.abs() <= 0.25));
    }

    #[test]
    fn coordinates_stay_in_range_across_ticks() {
        let mut rng = Rng::new(2024);
        let mut field = StarField::initialize(500, 1000.0, &mut rng);
        for _ in 0..2000 {
            field.tick(&mut rng);
            assert!(
                field.positions().iter().all(|c| c.abs() <= WRAP_LIMIT),
                "a star escaped the bounding cube"
            );
        }
    }

    #[test]
    fn wraparound_is_per_axis() {
        let mut rng = Rng::new(5);
        // Only X crosses the limit on the next tick.
        let mut field = single_star([999.9, 10.0, -20.0], [0.25, 0.1, -0.2]);
        field.tick(&mut rng);
        let [x, y, z] = [field.positions()[0], field.positions()[1], field.positions()[2]];
        assert!(x.abs() <= WRAP_LIMIT);
        assert_ne!(x, 999.9 + 0.25);
        assert!((y - 10.1).abs() < 1e-5);
        assert!((z - -20.2).abs() < 1e-5);
    }

    #[test]
    fn wrap_limit_ignores_spawn_bound() {
        let mut rng = Rng::new(11);
        // Spawned in a tiny cube, a star may still drift out to the fixed limit.
        let mut field = single_star([500.0, 0.0, 0.0], [0.25, 0.0, 0.0]);
        field.tick(&mut rng);
        assert!((field.positions()[0] - 500.25).abs() < 1e-4);
    }

    #[test]
    fn tick_marks_buffer_dirty() {
        let mut rng = Rng::new(3);
        let mut field = StarField::initialize(10, 100.0, &mut rng);
        assert!(field.take_dirty());
        assert!(!field.take_dirty());
        field.tick(&mut rng);
        assert!(field.take_dirty());
    }
}
