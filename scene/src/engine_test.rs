#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn core() -> SceneCore {
    let mut seed = 0.0_f64;
    SceneCore::new(move || {
        seed = (seed + 0.377) % 1.0;
        seed
    })
}

fn avatar_glb() -> Vec<u8> {
    let doc = json!({
        "meshes": [ { "primitives": [ { "attributes": { "POSITION": 0 } } ] } ],
        "accessors": [ { "min": [-0.4, 0.0, -0.3], "max": [0.4, 1.8, 0.3] } ]
    });
    let mut body = serde_json::to_vec(&doc).unwrap_or_default();
    while body.len() % 4 != 0 {
        body.push(b' ');
    }
    let total = 20 + body.len();
    let mut out = Vec::new();
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2_u32.to_le_bytes());
    out.extend_from_slice(&u32::try_from(total).unwrap_or(u32::MAX).to_le_bytes());
    out.extend_from_slice(&u32::try_from(body.len()).unwrap_or(u32::MAX).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&body);
    out
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_scene_has_particles_plane_and_pending_model() {
    let scene = core();
    assert_eq!(scene.particles.positions.len(), 300);
    assert_eq!(scene.plane.size, 15.0);
    assert_eq!(scene.plane.y, -2.0);
    assert!(scene.model.is_none());
    assert_eq!(scene.model_status, ModelStatus::Loading);
    assert_eq!(scene.time, 0.0);
}

#[test]
fn ground_plane_corners_lie_on_floor() {
    let plane = GroundPlane::default();
    for c in plane.corners() {
        assert_eq!(c.y, -2.0);
        assert_eq!(c.x.abs(), 7.5);
        assert_eq!(c.z.abs(), 7.5);
    }
}

// =============================================================
// Model loading
// =============================================================

#[test]
fn load_model_places_avatar() {
    let mut scene = core();
    scene.load_model(&avatar_glb()).expect("valid avatar");
    assert_eq!(scene.model_status, ModelStatus::Ready);
    let model = scene.model.expect("model placed");
    assert!((model.local_bounds.size().y - 4.0).abs() < 1e-9);
    assert!(scene.load_error().is_none());
}

#[test]
fn load_model_failure_records_localized_error() {
    let mut scene = core();
    assert!(scene.load_model(b"not a model at all").is_err());
    assert!(scene.model.is_none());
    assert_eq!(scene.load_error(), Some(MODEL_LOAD_ERROR));
}

#[test]
fn model_failed_clears_previous_model() {
    let mut scene = core();
    scene.load_model(&avatar_glb()).expect("valid avatar");
    scene.model_failed();
    assert!(scene.model.is_none());
    assert_eq!(scene.load_error(), Some("فشل تحميل النموذج"));
}

// =============================================================
// Frame loop
// =============================================================

#[test]
fn tick_advances_clock_and_particles() {
    let mut scene = core();
    scene.tick();
    scene.tick();
    assert!((scene.time - 0.02).abs() < 1e-12);
    assert!((scene.particles.rotation_y - 0.004).abs() < 1e-12);
    assert!((scene.particles.rotation_x - 0.002).abs() < 1e-12);
}

#[test]
fn tick_animates_model_from_clock() {
    let mut scene = core();
    scene.load_model(&avatar_glb()).expect("valid avatar");
    for _ in 0..100 {
        scene.tick();
    }
    let model = scene.model.expect("model placed");
    let t = scene.time;
    assert!((model.rotation_y - (t * 0.5).sin() * 0.3).abs() < 1e-9);
    assert!((model.position.y - (model.base_y + t.sin() * 0.1)).abs() < 1e-9);
}

#[test]
fn tick_without_model_still_animates_scene() {
    let mut scene = core();
    scene.model_failed();
    let before = scene.camera.position;
    scene.tick();
    assert_ne!(scene.camera.position, before);
}

// =============================================================
// Viewport / input
// =============================================================

#[test]
fn set_viewport_updates_camera_aspect() {
    let mut scene = core();
    scene.set_viewport(1200.0, 600.0, 2.0);
    assert_eq!(scene.camera.aspect, 2.0);
    assert_eq!(scene.dpr, 2.0);
}

#[test]
fn set_viewport_falls_back_to_unit_dpr() {
    let mut scene = core();
    scene.set_viewport(100.0, 100.0, 0.0);
    assert_eq!(scene.dpr, 1.0);
}

#[test]
fn wheel_zoom_respects_distance_clamp() {
    let mut scene = core();
    scene.set_viewport(800.0, 600.0, 1.0);
    for _ in 0..100 {
        scene.on_wheel(-120.0);
        scene.tick();
    }
    assert!((scene.camera.position - scene.controls.target).length() >= 2.5 - 1e-9);
}

#[test]
fn drag_pauses_auto_rotate() {
    let mut scene = core();
    scene.set_viewport(800.0, 600.0, 1.0);
    scene.on_pointer_down(Point::new(10.0, 10.0));
    for _ in 0..600 {
        scene.tick();
    }
    let held = scene.camera.position;
    scene.tick();
    assert!((scene.camera.position - held).length() < 1e-9);
    scene.on_pointer_up();
    scene.tick();
    assert!((scene.camera.position - held).length() > 1e-9);
}
