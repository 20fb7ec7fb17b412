#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_START};
use crate::math::Vec3;

/// A point in screen space (CSS pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A projected world point: screen position, view depth, and the number of
/// screen pixels one world unit covers at that depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub screen: Point,
    pub depth: f64,
    pub px_per_unit: f64,
}

/// Perspective camera looking from `position` towards `target`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::from_tuple(CAMERA_START),
            target: Vec3::new(0.0, CAMERA_START.1, 0.0),
            fov_deg: CAMERA_FOV_DEG,
            aspect: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Recompute the aspect ratio for a new viewport. Degenerate sizes keep
    /// the previous aspect.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Focal length in normalized device units (`1 / tan(fov / 2)`).
    #[must_use]
    pub fn focal(&self) -> f64 {
        1.0 / (self.fov_deg.to_radians() * 0.5).tan()
    }

    /// Orthonormal view basis `(right, up, forward)`.
    #[must_use]
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position).normalize();
        let mut right = forward.cross(Vec3::UP).normalize();
        if right == Vec3::ZERO {
            right = Vec3::new(1.0, 0.0, 0.0);
        }
        let up = right.cross(forward);
        (right, up, forward)
    }

    /// Transform a world point into view space, where `z` is the distance in
    /// front of the camera.
    #[must_use]
    pub fn world_to_view(&self, world: Vec3) -> Vec3 {
        let (right, up, forward) = self.basis();
        let d = world - self.position;
        Vec3::new(d.dot(right), d.dot(up), d.dot(forward))
    }

    /// Project a view-space point onto a `width` × `height` viewport.
    /// Returns `None` outside the near/far range.
    #[must_use]
    pub fn project_view(&self, view: Vec3, width: f64, height: f64) -> Option<Projected> {
        if view.z < self.near || view.z > self.far {
            return None;
        }
        let f = self.focal();
        let ndc_x = f * view.x / (view.z * self.aspect);
        let ndc_y = f * view.y / view.z;
        Some(Projected {
            screen: Point::new((ndc_x + 1.0) * 0.5 * width, (1.0 - ndc_y) * 0.5 * height),
            depth: view.z,
            px_per_unit: f * height * 0.5 / view.z,
        })
    }

    /// Project a world point onto a `width` × `height` viewport.
    #[must_use]
    pub fn project(&self, world: Vec3, width: f64, height: f64) -> Option<Projected> {
        self.project_view(self.world_to_view(world), width, height)
    }

    /// Clip a view-space polygon against the near plane.
    #[must_use]
    pub fn clip_near(&self, polygon: &[Vec3]) -> Vec<Vec3> {
        let mut out = Vec::with_capacity(polygon.len() + 2);
        for (i, &current) in polygon.iter().enumerate() {
            let next = polygon[(i + 1) % polygon.len()];
            let current_in = current.z >= self.near;
            let next_in = next.z >= self.near;
            if current_in {
                out.push(current);
            }
            if current_in != next_in {
                let t = (self.near - current.z) / (next.z - current.z);
                out.push(current + (next - current) * t);
            }
        }
        out
    }
}
