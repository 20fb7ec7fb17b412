use super::*;

fn signed_in(count: u32) -> SessionState {
    let mut session = SessionState::default();
    session.login("tok".to_owned(), count, "name@gmail.com".to_owned());
    session
}

#[test]
fn default_session_is_signed_out() {
    let session = SessionState::default();
    assert!(!session.is_authenticated());
    assert_eq!(session.daily_count, 0);
}

#[test]
fn empty_token_is_not_authenticated() {
    let mut session = SessionState::default();
    session.login(String::new(), 0, "a@gmail.com".to_owned());
    assert!(!session.is_authenticated());
}

#[test]
fn signed_out_submission_needs_auth_even_when_empty() {
    assert_eq!(SessionState::default().check_submission(""), Submission::NeedsAuth);
}

#[test]
fn limit_checked_before_empty_input() {
    assert_eq!(signed_in(2).check_submission("   "), Submission::LimitReached);
}

#[test]
fn whitespace_only_input_is_empty() {
    assert_eq!(signed_in(0).check_submission(" \n\t"), Submission::Empty);
}

#[test]
fn ready_submission_is_trimmed() {
    assert_eq!(signed_in(1).check_submission("  jack \n"), Submission::Ready("jack".to_owned()));
}

#[test]
fn third_analysis_is_blocked_after_two() {
    let mut session = signed_in(0);
    for _ in 0..DAILY_LIMIT {
        assert!(matches!(session.check_submission("jack"), Submission::Ready(_)));
        session.record_analysis();
    }
    assert_eq!(session.check_submission("jack"), Submission::LimitReached);
    assert!(session.limit_reached());
}

#[test]
fn login_adopts_server_count() {
    let session = signed_in(2);
    assert!(session.limit_reached());
    assert_eq!(session.email.as_deref(), Some("name@gmail.com"));
}

#[test]
fn logout_clears_token_and_count() {
    let mut session = signed_in(1);
    session.logout();
    assert_eq!(session, SessionState::default());
}

#[test]
fn relogin_resets_counter() {
    let mut session = signed_in(2);
    session.logout();
    session.login("tok2".to_owned(), 0, "name@gmail.com".to_owned());
    assert!(!session.limit_reached());
}
