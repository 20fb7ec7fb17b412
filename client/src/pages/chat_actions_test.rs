use super::*;
use crate::state::chat::Role;
use crate::state::session::DAILY_LIMIT;

#[test]
fn server_text_drives_failure_message() {
    let err = ApiError::Status { status: 404, text: "No tweets for @jack".to_owned() };
    assert_eq!(
        analysis_failure_message(&err, Language::En),
        "🤖 I couldn’t find any tweets for this account."
    );
}

#[test]
fn empty_body_fallback_is_unknown_failure() {
    let err = ApiError::Status { status: 500, text: "خطأ غير معروف".to_owned() };
    assert_eq!(analysis_failure_message(&err, Language::Ar), "🤖 حدث خطأ أثناء التحليل، حاول مجددًا.");
}

#[test]
fn transport_and_decode_failures_are_unknown() {
    let transport = ApiError::Transport("Failed to fetch".to_owned());
    let decode = ApiError::Decode("missing field `result`".to_owned());
    let expected = "🤖 An error occurred during analysis. Please try again.";
    assert_eq!(analysis_failure_message(&transport, Language::En), expected);
    assert_eq!(analysis_failure_message(&decode, Language::En), expected);
}

#[test]
fn limit_text_from_server() {
    let err = ApiError::Status { status: 429, text: "daily limit exceeded".to_owned() };
    assert_eq!(
        analysis_failure_message(&err, Language::En),
        "🤖 You've reached your daily limit. Try again later."
    );
}

// =============================================================
// submit_analysis / logout
// =============================================================

fn signed_in(daily_count: u32) -> SessionState {
    let mut session = SessionState::default();
    session.login("tok-1".to_owned(), daily_count, "name@gmail.com".to_owned());
    session
}

#[test]
fn submit_at_daily_limit_is_ignored() {
    let chat = RwSignal::new(ChatState::default());
    let session = RwSignal::new(signed_in(DAILY_LIMIT));
    let ui = RwSignal::new(UiState::default());
    let input = RwSignal::new("jack".to_owned());

    submit_analysis(chat, session, ui, input);

    assert!(chat.get_untracked().entries.is_empty());
    assert!(!ui.get_untracked().loading);
    assert!(!ui.get_untracked().show_auth_modal);
    assert_eq!(input.get_untracked(), "jack");
}

#[test]
fn submit_while_signed_out_opens_auth_modal() {
    let chat = RwSignal::new(ChatState::default());
    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    let input = RwSignal::new("jack".to_owned());

    submit_analysis(chat, session, ui, input);

    assert!(ui.get_untracked().show_auth_modal);
    assert!(chat.get_untracked().entries.is_empty());
    assert!(!ui.get_untracked().loading);
}

#[test]
fn blank_submit_does_nothing() {
    let chat = RwSignal::new(ChatState::default());
    let session = RwSignal::new(signed_in(0));
    let ui = RwSignal::new(UiState::default());
    let input = RwSignal::new("   ".to_owned());

    submit_analysis(chat, session, ui, input);

    assert!(chat.get_untracked().entries.is_empty());
    assert!(!ui.get_untracked().show_auth_modal);
}

// The browser build hands the tail to the wasm executor.
#[cfg(not(feature = "hydrate"))]
#[test]
fn submit_appends_trimmed_username_and_forces_auto_scroll() {
    let chat = RwSignal::new(ChatState::default());
    let session = RwSignal::new(signed_in(1));
    let ui = RwSignal::new(UiState { auto_scroll: false, ..UiState::default() });
    let input = RwSignal::new("  jack  ".to_owned());

    submit_analysis(chat, session, ui, input);

    let entries = chat.get_untracked().entries;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].role, Role::User);
    assert_eq!(entries[0].content, "jack");
    assert!(ui.get_untracked().auto_scroll);
    assert!(input.get_untracked().is_empty());
    // Counted only once a reveal completes.
    assert_eq!(session.get_untracked().daily_count, 1);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn logout_clears_session_and_appends_one_placeholder() {
    let chat = RwSignal::new(ChatState::default());
    let session = RwSignal::new(signed_in(1));
    let ui = RwSignal::new(UiState { loading: true, ..UiState::default() });

    logout(chat, session, ui);

    assert_eq!(session.get_untracked(), SessionState::default());
    assert!(!ui.get_untracked().loading);
    let state = chat.get_untracked();
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].role, Role::Assistant);
    assert!(state.entries[0].content.is_empty());
    assert!(state.in_progress.is_some());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn logout_retires_a_running_reveal() {
    let chat = RwSignal::new(ChatState::default());
    let session = RwSignal::new(signed_in(0));
    let ui = RwSignal::new(UiState::default());
    let old_ticket = chat
        .try_update(|c| {
            let generation = c.begin_exchange("jack");
            c.begin_reveal(generation)
        })
        .flatten()
        .expect("reveal started");
    assert!(chat.try_update(|c| c.apply_reveal(old_ticket, "partial")).unwrap_or(false));

    logout(chat, session, ui);

    assert_eq!(chat.try_update(|c| c.apply_reveal(old_ticket, "late text")), Some(false));
    assert_eq!(chat.try_update(|c| c.finish_reveal(old_ticket)), Some(false));
    let entries = chat.get_untracked().entries;
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].content, "partial");
    assert!(entries[2].content.is_empty());
}
