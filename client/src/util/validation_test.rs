use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn accepts_gmail_and_hotmail() {
    assert!(is_valid_email("name@gmail.com"));
    assert!(is_valid_email("first.last+tag@hotmail.com"));
}

#[test]
fn email_match_is_case_insensitive() {
    assert!(is_valid_email("Name@GMAIL.COM"));
}

#[test]
fn rejects_other_providers_and_malformed_addresses() {
    assert!(!is_valid_email("name@yahoo.com"));
    assert!(!is_valid_email("name@gmail.co"));
    assert!(!is_valid_email("@gmail.com"));
    assert!(!is_valid_email("name gmail.com"));
    assert!(!is_valid_email(" name@gmail.com"));
}

// =============================================================
// Password
// =============================================================

#[test]
fn short_password_is_rejected() {
    assert!(!is_strong_password("abc"));
}

#[test]
fn eight_chars_with_upper_and_symbol_pass() {
    assert!(is_strong_password("Abcdefg!"));
}

#[test]
fn underscore_counts_as_symbol() {
    assert!(is_strong_password("Abcdefg_"));
}

#[test]
fn password_needs_uppercase() {
    assert!(!is_strong_password("abcdefg!"));
}

#[test]
fn password_needs_symbol() {
    assert!(!is_strong_password("Abcdefgh1"));
}

#[test]
fn password_length_counts_utf16_units_not_bytes() {
    // Seven UTF-16 units, more than eight bytes.
    assert!(!is_strong_password("Aéééé!é"));
}

#[test]
fn astral_characters_count_as_two_units() {
    // Six characters, eight UTF-16 units.
    assert!(is_strong_password("Abc!😀😀"));
    // Five characters, seven units.
    assert!(!is_strong_password("Ab!😀😀"));
}

#[test]
fn password_must_be_single_line() {
    assert!(!is_strong_password("Abcd\nefg!"));
}

// =============================================================
// validate_signup
// =============================================================

#[test]
fn email_is_checked_before_password() {
    assert_eq!(validate_signup("bad", "abc"), Err(ValidationError::InvalidEmail));
}

#[test]
fn weak_password_reported_for_valid_email() {
    assert_eq!(validate_signup("name@gmail.com", "abc"), Err(ValidationError::WeakPassword));
}

#[test]
fn valid_signup_passes() {
    assert_eq!(validate_signup("name@gmail.com", "Abcdefg!"), Ok(()));
}

#[test]
fn messages_are_localized() {
    assert_eq!(
        ValidationError::WeakPassword.message(Language::En),
        "Password must have at least 8 characters, one uppercase letter, and one symbol."
    );
    assert!(ValidationError::InvalidEmail.message(Language::Ar).contains("Gmail"));
}
