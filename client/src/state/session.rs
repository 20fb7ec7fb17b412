//! Signed-in session: bearer token and the day's analysis count.
//!
//! Lives only in memory. A reload or logout forgets it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Analyses allowed per session day.
pub const DAILY_LIMIT: u32 = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub daily_count: u32,
    pub email: Option<String>,
}

/// Outcome of checking a composer submission, in precedence order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// No token: the auth modal should open.
    NeedsAuth,
    LimitReached,
    Empty,
    /// Trimmed username ready to send.
    Ready(String),
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    #[must_use]
    pub fn limit_reached(&self) -> bool {
        self.daily_count >= DAILY_LIMIT
    }

    /// Gate a submission: auth first, then the limit, then empty input.
    #[must_use]
    pub fn check_submission(&self, input: &str) -> Submission {
        if !self.is_authenticated() {
            return Submission::NeedsAuth;
        }
        if self.limit_reached() {
            return Submission::LimitReached;
        }
        let username = input.trim();
        if username.is_empty() {
            return Submission::Empty;
        }
        Submission::Ready(username.to_owned())
    }

    pub fn login(&mut self, token: String, daily_count: u32, email: String) {
        self.token = Some(token);
        self.daily_count = daily_count;
        self.email = Some(email);
    }

    pub fn logout(&mut self) {
        *self = Self::default();
    }

    /// Count one completed analysis.
    pub fn record_analysis(&mut self) {
        self.daily_count = self.daily_count.saturating_add(1);
    }
}
