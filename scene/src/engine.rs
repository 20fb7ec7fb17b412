use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::consts::{ANIMATION_STEP, FLOOR_Y, PLANE_COLOR, PLANE_OPACITY, PLANE_SIZE};
use crate::controls::OrbitControls;
use crate::glb::{self, GlbError};
use crate::lights::Lighting;
use crate::math::{Rgb, Vec3};
use crate::model::ModelNode;
use crate::particles::ParticleField;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Shown when the avatar model fails to load.
pub const MODEL_LOAD_ERROR: &str = "فشل تحميل النموذج";

/// Horizontal ground plane centred under the avatar.
#[derive(Debug, Clone, Copy)]
pub struct GroundPlane {
    pub size: f64,
    pub y: f64,
    pub color: Rgb,
    pub opacity: f64,
    pub receive_shadow: bool,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self {
            size: PLANE_SIZE,
            y: FLOOR_Y,
            color: Rgb::from_hex(PLANE_COLOR),
            opacity: PLANE_OPACITY,
            receive_shadow: true,
        }
    }
}

impl GroundPlane {
    /// World corners, counter-clockwise seen from above.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 4] {
        let h = self.size * 0.5;
        [
            Vec3::new(-h, self.y, -h),
            Vec3::new(h, self.y, -h),
            Vec3::new(h, self.y, h),
            Vec3::new(-h, self.y, h),
        ]
    }
}

/// Where the avatar model is in its load lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Core scene state: everything except the canvas element.
///
/// Separated from `Scene` so it can be tested without WASM/browser dependencies.
pub struct SceneCore {
    pub camera: Camera,
    pub controls: OrbitControls,
    pub lighting: Lighting,
    pub model: Option<ModelNode>,
    pub model_status: ModelStatus,
    pub particles: ParticleField,
    pub plane: GroundPlane,
    pub time: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl SceneCore {
    /// Build the scene with particles scattered by `random` (values in `0.0..1.0`).
    pub fn new(random: impl FnMut() -> f64) -> Self {
        let camera = Camera::default();
        let controls = OrbitControls::attached(&camera);
        Self {
            camera,
            controls,
            lighting: Lighting::default(),
            model: None,
            model_status: ModelStatus::Loading,
            particles: ParticleField::scatter(random),
            plane: GroundPlane::default(),
            time: 0.0,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    // --- Model ---

    /// Parse GLB bytes and place the avatar.
    ///
    /// # Errors
    ///
    /// Returns the parse error; the scene records the failure and keeps
    /// animating without a model.
    pub fn load_model(&mut self, bytes: &[u8]) -> Result<(), GlbError> {
        let placed = glb::model_bounds(bytes).and_then(|bounds| ModelNode::fit(bounds).ok_or(GlbError::NoPositionBounds));
        match placed {
            Ok(node) => {
                self.model = Some(node);
                self.model_status = ModelStatus::Ready;
                Ok(())
            }
            Err(e) => {
                self.model_failed();
                Err(e)
            }
        }
    }

    /// Record a model load failure (network or parse).
    pub fn model_failed(&mut self) {
        self.model = None;
        self.model_status = ModelStatus::Failed(MODEL_LOAD_ERROR.to_owned());
    }

    /// User-facing load error, if any.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        match &self.model_status {
            ModelStatus::Failed(msg) => Some(msg),
            ModelStatus::Loading | ModelStatus::Ready => None,
        }
    }

    // --- Frame ---

    /// Advance one animation frame.
    pub fn tick(&mut self) {
        self.time += ANIMATION_STEP;
        if let Some(model) = &mut self.model {
            model.animate(self.time);
        }
        self.particles.tick();
        self.controls.update(&mut self.camera);
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        self.camera.set_viewport(self.viewport_width, self.viewport_height);
    }

    // --- Input ---

    pub fn on_pointer_down(&mut self, screen: Point) {
        self.controls.on_pointer_down(screen);
    }

    pub fn on_pointer_move(&mut self, screen: Point) {
        self.controls.on_pointer_move(screen, self.viewport_height);
    }

    pub fn on_pointer_up(&mut self) {
        self.controls.on_pointer_up();
    }

    pub fn on_wheel(&mut self, dy: f64) {
        self.controls.on_wheel(dy);
    }
}

/// The full scene. Wraps `SceneCore` and owns the browser canvas element.
pub struct Scene {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: SceneCore,
}

impl Scene {
    /// Create a scene bound to `canvas`.
    ///
    /// # Errors
    ///
    /// Fails if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, random: impl FnMut() -> f64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: SceneCore::new(random) })
    }

    /// Resize the backing store and camera for a new container size.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((self.core.viewport_width * self.core.dpr).round() as u32);
        self.canvas.set_height((self.core.viewport_height * self.core.dpr).round() as u32);
    }

    /// Advance the animation and draw one frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.core.tick();
        self.render()
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        crate::render::draw(&self.ctx, &self.core)
    }

    // --- Delegated inputs ---

    /// # Errors
    ///
    /// See [`SceneCore::load_model`].
    pub fn load_model(&mut self, bytes: &[u8]) -> Result<(), GlbError> {
        self.core.load_model(bytes)
    }

    pub fn model_failed(&mut self) {
        self.core.model_failed();
    }

    pub fn on_pointer_down(&mut self, screen: Point) {
        self.core.on_pointer_down(screen);
    }

    pub fn on_pointer_move(&mut self, screen: Point) {
        self.core.on_pointer_move(screen);
    }

    pub fn on_pointer_up(&mut self) {
        self.core.on_pointer_up();
    }

    pub fn on_wheel(&mut self, dy: f64) {
        self.core.on_wheel(dy);
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.core.load_error()
    }
}
