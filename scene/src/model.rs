//! The avatar model: fitting its bounds into the scene and its idle motion.
//!
//! The loaded mesh sits inside a group. The mesh is scaled so its largest
//! dimension is [`MODEL_TARGET_SIZE`] and offset so its centre is the group
//! origin; the group stands on the floor and carries the idle animation.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use crate::consts::{
    FLOOR_Y, MODEL_BOB_AMPLITUDE, MODEL_PITCH_AMPLITUDE, MODEL_TARGET_SIZE, MODEL_YAW_AMPLITUDE, MODEL_Z,
};
use crate::math::{Mat4, Vec3};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: Vec3::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y), self.min.z.min(other.min.z)),
            max: Vec3::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y), self.max.z.max(other.max.z)),
        }
    }

    #[must_use]
    pub fn scaled(self, k: f64) -> Self {
        Self { min: self.min * k, max: self.max * k }
    }

    /// Axis-aligned box around this box's corners after `transform`.
    #[must_use]
    pub fn transformed(&self, transform: Mat4) -> Self {
        let [first, rest @ ..] = self.corners().map(|c| transform.transform_point(c));
        rest.into_iter().fold(Self { min: first, max: first }, |acc, c| acc.union(Self { min: c, max: c }))
    }

    /// The eight corners, bottom face first (counter-clockwise seen from above).
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(b.x, b.y, b.z),
            Vec3::new(a.x, b.y, b.z),
        ]
    }
}

/// Quad faces of a box as indices into [`Bounds::corners`], paired with their
/// outward normal in model space. The `+Z` face is the screen.
pub const BOX_FACES: [([usize; 4], Vec3); 6] = [
    ([0, 1, 2, 3], Vec3::new(0.0, -1.0, 0.0)),
    ([4, 7, 6, 5], Vec3::new(0.0, 1.0, 0.0)),
    ([0, 4, 5, 1], Vec3::new(0.0, 0.0, -1.0)),
    ([3, 2, 6, 7], Vec3::new(0.0, 0.0, 1.0)),
    ([0, 3, 7, 4], Vec3::new(-1.0, 0.0, 0.0)),
    ([1, 5, 6, 2], Vec3::new(1.0, 0.0, 0.0)),
];

/// The fitted avatar and its current pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelNode {
    /// Mesh bounds after scaling and centring (group-local space).
    pub local_bounds: Bounds,
    /// Uniform scale applied to the source mesh.
    pub scale: f64,
    /// Group position; `y` oscillates around `base_y`.
    pub position: Vec3,
    /// Resting group height: the bounds' base touches [`FLOOR_Y`].
    pub base_y: f64,
    pub rotation_x: f64,
    pub rotation_y: f64,
}

impl ModelNode {
    /// Fit raw mesh bounds into the scene. Returns `None` for an empty box.
    #[must_use]
    pub fn fit(source: Bounds) -> Option<Self> {
        let max_dim = source.size().max_component();
        if !max_dim.is_finite() || max_dim <= 0.0 {
            return None;
        }
        let scale = MODEL_TARGET_SIZE / max_dim;
        let scaled = source.scaled(scale);
        let center = scaled.center();
        let local_bounds = Bounds { min: scaled.min - center, max: scaled.max - center };
        let base_y = FLOOR_Y - local_bounds.min.y;

        Some(Self {
            local_bounds,
            scale,
            position: Vec3::new(0.0, base_y, MODEL_Z),
            base_y,
            rotation_x: 0.0,
            rotation_y: 0.0,
        })
    }

    /// Apply the idle sway and bob for animation time `t`.
    pub fn animate(&mut self, t: f64) {
        self.rotation_y = (t * 0.5).sin() * MODEL_YAW_AMPLITUDE;
        self.rotation_x = (t * 0.3).sin() * MODEL_PITCH_AMPLITUDE;
        self.position.y = self.base_y + t.sin() * MODEL_BOB_AMPLITUDE;
    }

    /// Transform a group-local point to world space.
    #[must_use]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        local.rotate_euler(self.rotation_x, self.rotation_y, 0.0) + self.position
    }

    /// Rotate a group-local direction to world space.
    #[must_use]
    pub fn direction_to_world(&self, local: Vec3) -> Vec3 {
        local.rotate_euler(self.rotation_x, self.rotation_y, 0.0)
    }

    /// World-space corners of the current pose.
    #[must_use]
    pub fn world_corners(&self) -> [Vec3; 8] {
        self.local_bounds.corners().map(|c| self.to_world(c))
    }
}
