//! Networking modules for the remote auth/analysis service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `stream` turns analysis bodies into text as
//! it arrives, `types` defines the JSON bodies, and `error` the shared
//! failure type.

pub mod api;
pub mod error;
pub mod stream;
pub mod types;
