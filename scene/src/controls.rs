//! Orbit controls: the camera circles a target on a sphere.
//!
//! Pointer drags and the auto-rotate timer only accumulate *pending* angular
//! deltas; [`OrbitControls::update`] applies a damped fraction of them each
//! frame and writes the resulting position back into the [`Camera`]. Panning
//! is disabled, so the target never moves.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use std::f64::consts::{PI, TAU};

use crate::camera::{Camera, Point};
use crate::consts::{AUTO_ROTATE_SPEED, DAMPING_FACTOR, MAX_DISTANCE, MIN_DISTANCE, POLAR_EPSILON, ZOOM_STEP};
use crate::math::Vec3;

/// Spherical coordinates around the orbit target (Y up).
///
/// `theta` is the azimuth measured from +Z towards +X, `phi` the polar angle
/// measured from +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f64,
    pub theta: f64,
    pub phi: f64,
}

impl Spherical {
    #[must_use]
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius <= f64::EPSILON {
            return Self { radius: 0.0, theta: 0.0, phi: 0.0 };
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    #[must_use]
    pub fn to_offset(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }
}

/// Orbit gesture currently in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum OrbitGesture {
    #[default]
    Idle,
    Rotating {
        last_screen: Point,
    },
}

/// Camera orbit controller with damping, auto-rotate and clamped zoom.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub min_distance: f64,
    pub max_distance: f64,
    pub damping_factor: f64,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f64,
    pub gesture: OrbitGesture,
    spherical: Spherical,
    delta_theta: f64,
    delta_phi: f64,
    scale: f64,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            damping_factor: DAMPING_FACTOR,
            auto_rotate: true,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            gesture: OrbitGesture::Idle,
            spherical: Spherical { radius: 1.0, theta: 0.0, phi: PI / 2.0 },
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
        }
    }
}

impl OrbitControls {
    /// Controls orbiting the origin, seeded from the camera's current position.
    #[must_use]
    pub fn attached(camera: &Camera) -> Self {
        let mut controls = Self::default();
        controls.spherical = Spherical::from_offset(camera.position - controls.target);
        controls
    }

    /// Current orbit coordinates.
    #[must_use]
    pub fn spherical(&self) -> Spherical {
        self.spherical
    }

    /// Current camera distance from the target.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.spherical.radius
    }

    fn rotate_left(&mut self, angle: f64) {
        self.delta_theta -= angle;
    }

    fn rotate_up(&mut self, angle: f64) {
        self.delta_phi -= angle;
    }

    /// Auto-rotate angle per frame: a full turn every 60 s at 60 fps for speed 1.
    #[must_use]
    pub fn auto_rotation_angle(&self) -> f64 {
        TAU / 60.0 / 60.0 * self.auto_rotate_speed
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, screen: Point) {
        self.gesture = OrbitGesture::Rotating { last_screen: screen };
    }

    /// Drag rotates by a full turn per viewport height of travel.
    pub fn on_pointer_move(&mut self, screen: Point, viewport_height: f64) {
        let OrbitGesture::Rotating { last_screen } = self.gesture else {
            return;
        };
        if viewport_height > 0.0 {
            self.rotate_left(TAU * (screen.x - last_screen.x) / viewport_height);
            self.rotate_up(TAU * (screen.y - last_screen.y) / viewport_height);
        }
        self.gesture = OrbitGesture::Rotating { last_screen: screen };
    }

    pub fn on_pointer_up(&mut self) {
        self.gesture = OrbitGesture::Idle;
    }

    /// Wheel up (negative `dy`) dollies in, wheel down dollies out.
    pub fn on_wheel(&mut self, dy: f64) {
        if dy < 0.0 {
            self.scale *= ZOOM_STEP;
        } else if dy > 0.0 {
            self.scale /= ZOOM_STEP;
        }
    }

    /// Advance one frame: apply auto-rotate, damping and the distance clamp,
    /// then move the camera. Returns `true` if the camera moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        if self.auto_rotate && self.gesture == OrbitGesture::Idle {
            self.rotate_left(self.auto_rotation_angle());
        }

        let before = camera.position;

        self.spherical.theta += self.delta_theta * self.damping_factor;
        self.spherical.phi += self.delta_phi * self.damping_factor;
        self.spherical.phi = self.spherical.phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.spherical.radius = (self.spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);

        self.delta_theta *= 1.0 - self.damping_factor;
        self.delta_phi *= 1.0 - self.damping_factor;
        self.scale = 1.0;

        camera.position = self.target + self.spherical.to_offset();
        camera.target = self.target;

        (camera.position - before).length() > f64::EPSILON
    }
}
