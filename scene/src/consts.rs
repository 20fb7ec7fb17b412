//! Shared numeric constants for the scene crate.

// ── Camera ──────────────────────────────────────────────────────

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEG: f64 = 60.0;

/// Near clip distance.
pub const CAMERA_NEAR: f64 = 0.1;

/// Far clip distance.
pub const CAMERA_FAR: f64 = 1000.0;

/// Initial camera position `(x, y, z)`.
pub const CAMERA_START: (f64, f64, f64) = (0.0, 1.5, 3.5);

// ── Orbit controls ──────────────────────────────────────────────

/// Fraction of the pending rotation applied per update.
pub const DAMPING_FACTOR: f64 = 0.05;

/// Closest allowed orbit distance.
pub const MIN_DISTANCE: f64 = 2.5;

/// Farthest allowed orbit distance.
pub const MAX_DISTANCE: f64 = 4.5;

/// Auto-rotate speed; 1.0 is one revolution per minute at 60 fps.
pub const AUTO_ROTATE_SPEED: f64 = 1.0;

/// Per-notch dolly factor for wheel zoom.
pub const ZOOM_STEP: f64 = 0.95;

/// Keeps the polar angle away from the poles.
pub const POLAR_EPSILON: f64 = 1e-6;

// ── Model ───────────────────────────────────────────────────────

/// Largest dimension of the fitted avatar, in world units.
pub const MODEL_TARGET_SIZE: f64 = 4.0;

/// World y of the floor the avatar stands on.
pub const FLOOR_Y: f64 = -2.0;

/// World z of the avatar group.
pub const MODEL_Z: f64 = -3.0;

/// Idle motion step added to the animation clock every frame.
pub const ANIMATION_STEP: f64 = 0.01;

/// Idle yaw amplitude in radians.
pub const MODEL_YAW_AMPLITUDE: f64 = 0.3;

/// Idle pitch amplitude in radians.
pub const MODEL_PITCH_AMPLITUDE: f64 = 0.1;

/// Idle bob amplitude in world units.
pub const MODEL_BOB_AMPLITUDE: f64 = 0.1;

// ── Particles ───────────────────────────────────────────────────

/// Number of particles in the field.
pub const PARTICLE_COUNT: usize = 300;

/// Extent of the particle box `(x, y, z)`, centred on the origin.
pub const PARTICLE_SPREAD: (f64, f64, f64) = (30.0, 20.0, 30.0);

/// Particle diameter in world units.
pub const PARTICLE_SIZE: f64 = 0.02;

/// Particle opacity.
pub const PARTICLE_OPACITY: f64 = 0.8;

/// Per-frame particle spin about Y, in radians.
pub const PARTICLE_SPIN_Y: f64 = 0.002;

/// Per-frame particle spin about X, in radians.
pub const PARTICLE_SPIN_X: f64 = 0.001;

// ── Ground plane ────────────────────────────────────────────────

/// Edge length of the square ground plane.
pub const PLANE_SIZE: f64 = 15.0;

/// Ground plane colour.
pub const PLANE_COLOR: u32 = 0x0033_3333;

/// Ground plane opacity.
pub const PLANE_OPACITY: f64 = 0.3;

// ── Lights ──────────────────────────────────────────────────────

pub const AMBIENT_COLOR: u32 = 0x0040_4040;
pub const AMBIENT_INTENSITY: f64 = 0.3;

pub const DIRECTIONAL_COLOR: u32 = 0x00ff_ffff;
pub const DIRECTIONAL_INTENSITY: f64 = 1.0;
pub const DIRECTIONAL_POSITION: (f64, f64, f64) = (5.0, 10.0, 5.0);

/// Shadow map edge length for the directional light.
pub const SHADOW_MAP_SIZE: u32 = 2048;

pub const HEMISPHERE_SKY: u32 = 0x00ff_ffff;
pub const HEMISPHERE_GROUND: u32 = 0x0044_4444;
pub const HEMISPHERE_INTENSITY: f64 = 0.8;
pub const HEMISPHERE_POSITION: (f64, f64, f64) = (0.0, 20.0, 0.0);

/// Base albedo of the avatar body.
pub const MODEL_COLOR: u32 = 0x008a_8f99;

/// Base albedo of the avatar's front (screen) face.
pub const MODEL_SCREEN_COLOR: u32 = 0x002b_6cb0;
