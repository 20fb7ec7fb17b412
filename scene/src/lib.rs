//! Decorative avatar scene rendered behind the chat.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the avatar backdrop: camera and orbit controls, lights,
//! the fitted avatar model, the particle field, and the ground plane. The host
//! (the chat client's `AvatarScene` component) only forwards DOM events,
//! drives the animation frame loop, and hands over the model bytes.
//!
//! Nothing in here reads or writes chat state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Scene`] and testable [`engine::SceneCore`] |
//! | [`math`] | `Vec3` and Euler rotation helpers |
//! | [`camera`] | Perspective camera, view transform, projection |
//! | [`controls`] | Orbit controls: damping, auto-rotate, clamped zoom, no pan |
//! | [`lights`] | Ambient / directional / hemisphere lights and Lambert shading |
//! | [`model`] | Bounding-box fit and idle motion of the avatar |
//! | [`particles`] | Random particle cloud with constant spin |
//! | [`glb`] | Binary glTF container parsing (bounds only) |
//! | [`render`] | Canvas2D drawing of the scene |
//! | [`consts`] | Shared numeric constants |

pub mod camera;
pub mod consts;
pub mod controls;
pub mod engine;
pub mod glb;
pub mod lights;
pub mod math;
pub mod model;
pub mod particles;
pub mod render;
