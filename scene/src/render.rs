//! Rendering: draws the avatar scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of [`SceneCore`] and produces pixels; it does
//! not mutate any scene state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Scene::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Point};
use crate::consts::{MODEL_COLOR, MODEL_SCREEN_COLOR, PARTICLE_OPACITY, PARTICLE_SIZE};
use crate::engine::SceneCore;
use crate::math::{Rgb, Vec3};
use crate::model::{BOX_FACES, ModelNode};

/// Smallest particle radius drawn, in CSS pixels.
const MIN_PARTICLE_RADIUS_PX: f64 = 0.6;

/// Opacity of the avatar's contact shadow on the floor.
const SHADOW_ALPHA: f64 = 0.35;

/// Draw the full scene: floor, shadow, particles, avatar.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &SceneCore) -> Result<(), JsValue> {
    let w = scene.viewport_width;
    let h = scene.viewport_height;

    // Layer 1: transparent clear at device resolution.
    ctx.set_transform(scene.dpr, 0.0, 0.0, scene.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, w, h);
    if w <= 0.0 || h <= 0.0 {
        return Ok(());
    }

    // Layer 2: ground plane.
    let plane_view = scene.plane.corners().map(|c| scene.camera.world_to_view(c));
    fill_view_polygon(ctx, &scene.camera, &plane_view, w, h, &scene.plane.color.to_css(scene.plane.opacity))?;

    // Layer 3: avatar shadow on the floor.
    if let Some(model) = &scene.model {
        if scene.plane.receive_shadow {
            draw_shadow(ctx, scene, model, w, h)?;
        }
    }

    // Layer 4: particles.
    draw_particles(ctx, scene, w, h);

    // Layer 5: avatar.
    if let Some(model) = &scene.model {
        draw_model(ctx, scene, model, w, h)?;
    }

    Ok(())
}

// =============================================================
// Layers
// =============================================================

fn draw_particles(ctx: &CanvasRenderingContext2d, scene: &SceneCore, w: f64, h: f64) {
    ctx.set_fill_style_str(&Rgb::from_hex(0x00ff_ffff).to_css(PARTICLE_OPACITY));
    ctx.begin_path();
    for world in scene.particles.world_positions() {
        let Some(p) = scene.camera.project(world, w, h) else {
            continue;
        };
        let r = (PARTICLE_SIZE * 0.5 * p.px_per_unit).max(MIN_PARTICLE_RADIUS_PX);
        ctx.move_to(p.screen.x + r, p.screen.y);
        if ctx.arc(p.screen.x, p.screen.y, r, 0.0, TAU).is_err() {
            continue;
        }
    }
    ctx.fill();
}

fn draw_shadow(
    ctx: &CanvasRenderingContext2d,
    scene: &SceneCore,
    model: &ModelNode,
    w: f64,
    h: f64,
) -> Result<(), JsValue> {
    let floor = scene.plane.y + 0.001;
    let mut footprint = Vec::with_capacity(8);
    for corner in model.world_corners() {
        if let Some(p) = scene.lighting.shadow_on_floor(corner, floor) {
            footprint.push(p);
        }
    }
    if footprint.len() < 3 {
        return Ok(());
    }
    let hull = convex_hull_xz(&footprint);
    let view = hull.iter().map(|&p| scene.camera.world_to_view(p)).collect::<Vec<_>>();
    fill_view_polygon(ctx, &scene.camera, &view, w, h, &format!("rgba(0, 0, 0, {SHADOW_ALPHA})"))
}

fn draw_model(ctx: &CanvasRenderingContext2d, scene: &SceneCore, model: &ModelNode, w: f64, h: f64) -> Result<(), JsValue> {
    let corners = model.world_corners();
    let body = Rgb::from_hex(MODEL_COLOR);
    let screen = Rgb::from_hex(MODEL_SCREEN_COLOR);

    // Painter's order: farthest face first. Back faces are culled.
    let mut faces = BOX_FACES
        .iter()
        .enumerate()
        .filter_map(|(i, (indices, local_normal))| {
            let normal = model.direction_to_world(*local_normal);
            let centroid = indices.iter().fold(Vec3::ZERO, |acc, &k| acc + corners[k]) * 0.25;
            if normal.dot(scene.camera.position - centroid) <= 0.0 {
                return None;
            }
            let depth = scene.camera.world_to_view(centroid).z;
            let albedo = if i == 3 { screen } else { body };
            Some((depth, *indices, scene.lighting.shade(albedo, normal)))
        })
        .collect::<Vec<_>>();
    faces.sort_by(|a, b| b.0.total_cmp(&a.0));

    for (_, indices, color) in faces {
        let view = indices.map(|k| scene.camera.world_to_view(corners[k]));
        fill_view_polygon(ctx, &scene.camera, &view, w, h, &color.to_css(1.0))?;
    }
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

/// Clip a view-space polygon at the near plane, project it, and fill it.
fn fill_view_polygon(
    ctx: &CanvasRenderingContext2d,
    camera: &Camera,
    view: &[Vec3],
    w: f64,
    h: f64,
    fill: &str,
) -> Result<(), JsValue> {
    let clipped = camera.clip_near(view);
    let points = clipped
        .iter()
        .filter_map(|&v| camera.project_view(v, w, h))
        .map(|p| p.screen)
        .collect::<Vec<Point>>();
    let Some((first, rest)) = points.split_first() else {
        return Ok(());
    };
    if rest.len() < 2 {
        return Ok(());
    }

    ctx.save();
    ctx.set_fill_style_str(fill);
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();
    ctx.fill();
    ctx.restore();
    Ok(())
}

/// Convex hull of points on a horizontal plane (monotone chain over x/z).
fn convex_hull_xz(points: &[Vec3]) -> Vec<Vec3> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.z.total_cmp(&b.z)));
    if sorted.len() < 3 {
        return sorted;
    }

    let turn = |o: Vec3, a: Vec3, b: Vec3| (a.x - o.x) * (b.z - o.z) - (a.z - o.z) * (b.x - o.x);

    let mut lower: Vec<Vec3> = Vec::new();
    for &p in &sorted {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Vec3> = Vec::new();
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
