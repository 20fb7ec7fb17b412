//! Page modules for route-level screens.
//!
//! The chat page owns the layout; `chat_actions` and `auth_actions` hold the
//! async flows its components trigger.

pub(crate) mod auth_actions;
pub mod chat;
pub(crate) mod chat_actions;
