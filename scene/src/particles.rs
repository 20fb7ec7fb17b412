#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use crate::consts::{PARTICLE_COUNT, PARTICLE_SPIN_X, PARTICLE_SPIN_Y, PARTICLE_SPREAD};
use crate::math::Vec3;

/// A cloud of points scattered uniformly in a box, spinning as one object.
#[derive(Debug, Clone)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub rotation_x: f64,
    pub rotation_y: f64,
}

impl ParticleField {
    /// Scatter [`PARTICLE_COUNT`] points using `random`, which must yield
    /// values in `0.0..1.0`.
    pub fn scatter(mut random: impl FnMut() -> f64) -> Self {
        let (sx, sy, sz) = PARTICLE_SPREAD;
        let positions = (0..PARTICLE_COUNT)
            .map(|_| {
                let x = (random() - 0.5) * sx;
                let y = (random() - 0.5) * sy;
                let z = (random() - 0.5) * sz;
                Vec3::new(x, y, z)
            })
            .collect();
        Self { positions, rotation_x: 0.0, rotation_y: 0.0 }
    }

    /// Advance the constant spin by one frame.
    pub fn tick(&mut self) {
        self.rotation_y += PARTICLE_SPIN_Y;
        self.rotation_x += PARTICLE_SPIN_X;
    }

    /// World positions under the current spin.
    pub fn world_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions
            .iter()
            .map(|p| p.rotate_euler(self.rotation_x, self.rotation_y, 0.0))
    }
}
