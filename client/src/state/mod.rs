//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `session`, `ui`) so individual
//! components can depend on small focused models. Each is held in an
//! `RwSignal` provided through context by `app::App`.

pub mod chat;
pub mod session;
pub mod ui;
