//! Mapping of raw server/transport error text to localized messages.
//!
//! Classification is substring based because the remote service reports
//! failures as free text.

#[cfg(test)]
#[path = "failure_test.rs"]
mod failure_test;

use super::i18n::{Language, Text, error_with_detail, tr};

/// Prefix on every analysis failure shown in the chat log.
pub const ASSISTANT_ERROR_PREFIX: &str = "🤖 ";

/// Why an analysis request failed, as far as the user is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisFailure {
    NoTweets,
    Username,
    Limit,
    Unknown,
}

impl AnalysisFailure {
    /// First match wins: `"No tweets"`, then `"Username"`, then `"limit"`.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        if text.contains("No tweets") {
            Self::NoTweets
        } else if text.contains("Username") {
            Self::Username
        } else if text.contains("limit") {
            Self::Limit
        } else {
            Self::Unknown
        }
    }

    /// Chat-log line for this failure.
    #[must_use]
    pub fn message(self, lang: Language) -> String {
        let key = match self {
            Self::NoTweets => Text::NoTweets,
            Self::Username => Text::UnknownAccount,
            Self::Limit => Text::DailyLimit,
            Self::Unknown => Text::AnalysisFailed,
        };
        format!("{ASSISTANT_ERROR_PREFIX}{}", tr(lang, key))
    }
}

/// Why a signup request failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupFailure {
    EmailExists,
    WeakPassword,
    InvalidEmail,
    Other(String),
}

impl SignupFailure {
    /// `status` is `None` for failures that never got a response.
    #[must_use]
    pub fn classify(status: Option<u16>, text: &str) -> Self {
        if status == Some(409) || text.contains("Email already exists") || text.contains("EMAIL_EXISTS") {
            Self::EmailExists
        } else if status == Some(400) && text.contains("Password is too weak") {
            Self::WeakPassword
        } else if status == Some(400) && text.contains("Invalid email format") {
            Self::InvalidEmail
        } else {
            Self::Other(text.to_owned())
        }
    }

    #[must_use]
    pub fn message(&self, lang: Language) -> String {
        match self {
            Self::EmailExists => tr(lang, Text::EmailExists).to_owned(),
            Self::WeakPassword => tr(lang, Text::PasswordTooWeak).to_owned(),
            Self::InvalidEmail => tr(lang, Text::InvalidEmailFormat).to_owned(),
            Self::Other(detail) => error_with_detail(lang, detail),
        }
    }
}
