#[cfg(test)]
#[path = "math_test.rs"]
mod math_test;

use std::ops::{Add, Mul, Neg, Sub};

/// A point or direction in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0, z: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn from_tuple(t: (f64, f64, f64)) -> Self {
        Self { x: t.0, y: t.1, z: t.2 }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len <= f64::EPSILON {
            return Self::ZERO;
        }
        self * (1.0 / len)
    }

    /// Component-wise maximum of the three axes.
    #[must_use]
    pub fn max_component(self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// Rotate by Euler angles in Three.js `XYZ` order (`Rx · Ry · Rz · v`).
    #[must_use]
    pub fn rotate_euler(self, rx: f64, ry: f64, rz: f64) -> Self {
        self.rotate_z(rz).rotate_y(ry).rotate_x(rx)
    }

    #[must_use]
    pub fn rotate_x(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self { x: self.x, y: self.y * c - self.z * s, z: self.y * s + self.z * c }
    }

    #[must_use]
    pub fn rotate_y(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self { x: self.x * c + self.z * s, y: self.y, z: -self.x * s + self.z * c }
    }

    #[must_use]
    pub fn rotate_z(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self { x: self.x * c - self.y * s, y: self.x * s + self.y * c, z: self.z }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y, z: -self.z }
    }
}

/// Column-major 4x4 affine transform, laid out like a glTF node `matrix`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4(pub [f64; 16]);

impl Mat4 {
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Translation, then rotation by the unit quaternion `[x, y, z, w]`, then
    /// scale, composed as `T * R * S`.
    #[must_use]
    pub fn from_trs(translation: Vec3, rotation: [f64; 4], scale: Vec3) -> Self {
        let [x, y, z, w] = rotation;
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, xy, xz) = (x * x2, x * y2, x * z2);
        let (yy, yz, zz) = (y * y2, y * z2, z * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);
        Self([
            (1.0 - (yy + zz)) * scale.x,
            (xy + wz) * scale.x,
            (xz - wy) * scale.x,
            0.0,
            (xy - wz) * scale.y,
            (1.0 - (xx + zz)) * scale.y,
            (yz + wx) * scale.y,
            0.0,
            (xz + wy) * scale.z,
            (yz - wx) * scale.z,
            (1.0 - (xx + yy)) * scale.z,
            0.0,
            translation.x,
            translation.y,
            translation.z,
            1.0,
        ])
    }

    /// `self * other`: apply `other` first.
    #[must_use]
    pub fn then_local(self, other: Self) -> Self {
        let (a, b) = (self.0, other.0);
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = (0..4).map(|k| a[k * 4 + row] * b[col * 4 + k]).sum();
            }
        }
        Self(out)
    }

    #[must_use]
    pub fn transform_point(self, p: Vec3) -> Vec3 {
        let m = self.0;
        Vec3::new(
            m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12],
            m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13],
            m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14],
        )
    }
}

/// An RGB colour with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Decode a `0xRRGGBB` hex literal.
    #[must_use]
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| f64::from((hex >> shift) & 0xff) / 255.0;
        Self { r: channel(16), g: channel(8), b: channel(0) }
    }

    #[must_use]
    pub fn scale(self, k: f64) -> Self {
        Self { r: self.r * k, g: self.g * k, b: self.b * k }
    }

    #[must_use]
    pub fn mul(self, other: Self) -> Self {
        Self { r: self.r * other.r, g: self.g * other.g, b: self.b * other.b }
    }

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self { r: self.r + other.r, g: self.g + other.g, b: self.b + other.b }
    }

    /// Linear blend from `self` (t = 0) to `other` (t = 1).
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// CSS `rgba(...)` string with channels clamped to `0..=255`.
    #[must_use]
    pub fn to_css(self, alpha: f64) -> String {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let to_byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgba({}, {}, {}, {})", to_byte(self.r), to_byte(self.g), to_byte(self.b), alpha.clamp(0.0, 1.0))
    }
}
