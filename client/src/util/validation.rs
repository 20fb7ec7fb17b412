//! Client-side signup validation. Runs before any network call.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::i18n::{Language, Text, tr};

/// Minimum password length, in UTF-16 code units.
pub const MIN_PASSWORD_UNITS: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^[a-zA-Z0-9._%+-]+@(gmail|hotmail)\.com$")
        .case_insensitive(true)
        .build()
        .expect("email pattern is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a Gmail or Hotmail address.
    InvalidEmail,
    /// Too short, or missing an uppercase letter or symbol.
    WeakPassword,
}

impl ValidationError {
    #[must_use]
    pub fn message(self, lang: Language) -> &'static str {
        match self {
            Self::InvalidEmail => tr(lang, Text::InvalidEmailAddress),
            Self::WeakPassword => tr(lang, Text::PasswordRule),
        }
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least eight UTF-16 code units on one line, with an ASCII uppercase
/// letter and a symbol (anything that is not an ASCII letter or digit; `_`
/// counts). Length is measured the way a browser measures string length, so
/// a character outside the Basic Multilingual Plane counts twice.
#[must_use]
pub fn is_strong_password(password: &str) -> bool {
    let single_line = !password.contains(['\n', '\r', '\u{2028}', '\u{2029}']);
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());
    single_line && has_upper && has_symbol && password.encode_utf16().count() >= MIN_PASSWORD_UNITS
}

/// Check signup input; the email is checked first.
///
/// # Errors
///
/// Returns the first rule the input breaks.
pub fn validate_signup(email: &str, password: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_strong_password(password) {
        return Err(ValidationError::WeakPassword);
    }
    Ok(())
}
