//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (localization, validation, failure mapping, pacing) live
//! here so pages and components stay thin and the logic stays testable
//! without a browser.

pub mod failure;
pub mod hover;
pub mod i18n;
pub mod reveal;
pub mod scroll;
pub mod validation;
