#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use super::*;

const EPSILON: f64 = 1e-10;

fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
}

// =============================================================
// Vec3
// =============================================================

#[test]
fn cross_of_x_and_y_is_z() {
    let z = Vec3::new(1.0, 0.0, 0.0).cross(Vec3::new(0.0, 1.0, 0.0));
    assert!(vec_approx_eq(z, Vec3::new(0.0, 0.0, 1.0)));
}

#[test]
fn normalize_produces_unit_length() {
    let v = Vec3::new(3.0, 4.0, 12.0).normalize();
    assert!((v.length() - 1.0).abs() < EPSILON);
}

#[test]
fn normalize_zero_stays_zero() {
    assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
}

#[test]
fn max_component_picks_largest_axis() {
    assert_eq!(Vec3::new(1.0, 7.0, 3.0).max_component(), 7.0);
}

#[test]
fn rotate_y_quarter_turn_maps_x_to_negative_z() {
    let v = Vec3::new(1.0, 0.0, 0.0).rotate_y(FRAC_PI_2);
    assert!(vec_approx_eq(v, Vec3::new(0.0, 0.0, -1.0)));
}

#[test]
fn rotate_x_quarter_turn_maps_y_to_z() {
    let v = Vec3::new(0.0, 1.0, 0.0).rotate_x(FRAC_PI_2);
    assert!(vec_approx_eq(v, Vec3::new(0.0, 0.0, 1.0)));
}

#[test]
fn rotate_euler_applies_y_before_x() {
    // Ry first sends +X to -Z, then Rx sends -Z to +Y.
    let v = Vec3::new(1.0, 0.0, 0.0).rotate_euler(FRAC_PI_2, FRAC_PI_2, 0.0);
    assert!(vec_approx_eq(v, Vec3::new(0.0, 1.0, 0.0)));
}

#[test]
fn rotation_preserves_length() {
    let v = Vec3::new(2.0, -1.0, 0.5);
    let r = v.rotate_euler(0.3, -1.2, 2.0);
    assert!((v.length() - r.length()).abs() < EPSILON);
}

// =============================================================
// Mat4
// =============================================================

#[test]
fn trs_scales_then_rotates_then_translates() {
    let half = FRAC_PI_2 / 2.0;
    // Quarter turn about Y.
    let m = Mat4::from_trs(Vec3::new(0.0, 1.0, 0.0), [0.0, half.sin(), 0.0, half.cos()], Vec3::new(2.0, 2.0, 2.0));
    let p = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
    assert!(vec_approx_eq(p, Vec3::new(0.0, 1.0, -2.0)));
}

#[test]
fn then_local_applies_the_child_first() {
    let parent = Mat4::from_trs(Vec3::new(5.0, 0.0, 0.0), [0.0, 0.0, 0.0, 1.0], Vec3::new(1.0, 1.0, 1.0));
    let child = Mat4::from_trs(Vec3::ZERO, [0.0, 0.0, 0.0, 1.0], Vec3::new(3.0, 3.0, 3.0));
    let p = parent.then_local(child).transform_point(Vec3::new(1.0, 1.0, 1.0));
    assert!(vec_approx_eq(p, Vec3::new(8.0, 3.0, 3.0)));
    assert_eq!(Mat4::IDENTITY.then_local(child), child);
}

// =============================================================
// Rgb
// =============================================================

#[test]
fn from_hex_decodes_channels() {
    let c = Rgb::from_hex(0x00ff_8000);
    assert_eq!(c.r, 1.0);
    assert!((c.g - 128.0 / 255.0).abs() < EPSILON);
    assert_eq!(c.b, 0.0);
}

#[test]
fn to_css_clamps_overexposed_channels() {
    let c = Rgb { r: 2.0, g: 0.5, b: -1.0 };
    assert_eq!(c.to_css(1.0), "rgba(255, 128, 0, 1)");
}

#[test]
fn lerp_endpoints() {
    let a = Rgb::from_hex(0x0000_0000);
    let b = Rgb::from_hex(0x00ff_ffff);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
}
