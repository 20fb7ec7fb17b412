use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert_eq!(state.language, Language::Ar);
    assert!(!state.show_auth_modal);
    assert!(state.auth_notice.is_none());
    assert!(!state.loading);
    assert!(state.auto_scroll);
    assert!(!state.show_ai_warning);
}

#[test]
fn toggle_language_round_trips() {
    let mut state = UiState::default();
    state.toggle_language();
    assert_eq!(state.language, Language::En);
    state.toggle_language();
    assert_eq!(state.language, Language::Ar);
}

// =============================================================
// Auth modal / notice
// =============================================================

#[test]
fn closing_modal_clears_notice() {
    let mut state = UiState::default();
    state.open_auth_modal();
    state.set_notice(AuthNotice::error("bad"));
    state.close_auth_modal();
    assert!(!state.show_auth_modal);
    assert!(state.auth_notice.is_none());
}

#[test]
fn timed_clear_removes_its_own_notice() {
    let mut state = UiState::default();
    let seq = state.set_notice(AuthNotice::success("created"));
    state.clear_notice_if(seq);
    assert!(state.auth_notice.is_none());
}

#[test]
fn timed_clear_spares_newer_notice() {
    let mut state = UiState::default();
    let seq = state.set_notice(AuthNotice::success("created"));
    state.set_notice(AuthNotice::error("later failure"));
    state.clear_notice_if(seq);
    assert_eq!(state.auth_notice, Some(AuthNotice::error("later failure")));
}

#[test]
fn notice_tones() {
    assert_eq!(AuthNotice::error("x").tone, NoticeTone::Error);
    assert_eq!(AuthNotice::success("x").tone, NoticeTone::Success);
}

// =============================================================
// AI warning toast
// =============================================================

#[test]
fn overlapping_toasts_close_with_latest_timer() {
    let mut state = UiState::default();
    let first = state.raise_ai_warning();
    let second = state.raise_ai_warning();
    state.hide_ai_warning_if(first);
    assert!(state.show_ai_warning);
    state.hide_ai_warning_if(second);
    assert!(!state.show_ai_warning);
}
