//! Reusable UI component modules.
//!
//! Components read and write the shared `ChatState`, `SessionState`, and
//! `UiState` signals provided by [`crate::app::App`]. Network and timing work
//! is delegated to `pages::chat_actions` and `pages::auth_actions`.

pub mod account_menu;
pub mod ai_warning;
pub mod auth_modal;
pub mod avatar_scene;
pub mod chat_log;
pub mod composer;
pub mod header;
