//! Local UI chrome state (language, auth modal, toasts, loading).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of chat and session state.
//! Timed elements (signup notice, AI toast) carry a sequence number so a
//! timer armed for an older notice never hides a newer one.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::i18n::Language;

/// How long the AI-disclaimer toast stays up.
pub const AI_WARNING_MS: u32 = 3_000;

/// How long the signup success notice stays up.
pub const SIGNUP_NOTICE_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Error,
    Success,
}

/// Line shown under the auth form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthNotice {
    pub tone: NoticeTone,
    pub text: String,
}

impl AuthNotice {
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { tone: NoticeTone::Error, text: text.into() }
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self { tone: NoticeTone::Success, text: text.into() }
    }
}

#[derive(Clone, Debug)]
pub struct UiState {
    pub language: Language,
    pub show_auth_modal: bool,
    pub auth_notice: Option<AuthNotice>,
    pub auth_notice_seq: u64,
    pub loading: bool,
    pub auto_scroll: bool,
    pub show_ai_warning: bool,
    pub ai_warning_seq: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            language: Language::Ar,
            show_auth_modal: false,
            auth_notice: None,
            auth_notice_seq: 0,
            loading: false,
            auto_scroll: true,
            show_ai_warning: false,
            ai_warning_seq: 0,
        }
    }
}

impl UiState {
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn open_auth_modal(&mut self) {
        self.show_auth_modal = true;
    }

    pub fn close_auth_modal(&mut self) {
        self.show_auth_modal = false;
        self.clear_notice();
    }

    /// Replace the auth notice; returns its sequence for a timed clear.
    pub fn set_notice(&mut self, notice: AuthNotice) -> u64 {
        self.auth_notice = Some(notice);
        self.auth_notice_seq += 1;
        self.auth_notice_seq
    }

    pub fn clear_notice(&mut self) {
        self.auth_notice = None;
        self.auth_notice_seq += 1;
    }

    /// Clear the notice only if it is still the one numbered `seq`.
    pub fn clear_notice_if(&mut self, seq: u64) {
        if self.auth_notice_seq == seq {
            self.auth_notice = None;
        }
    }

    /// Show the AI toast; returns its sequence for the timed hide.
    pub fn raise_ai_warning(&mut self) -> u64 {
        self.show_ai_warning = true;
        self.ai_warning_seq += 1;
        self.ai_warning_seq
    }

    pub fn hide_ai_warning_if(&mut self, seq: u64) {
        if self.ai_warning_seq == seq {
            self.show_ai_warning = false;
        }
    }
}
