//! Error type shared by the HTTP helpers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a request to the remote auth/analysis service.
///
/// The `Display` text of [`ApiError::Status`] is the server's own message,
/// which is what the substring classifiers in `util::failure` match against.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// Non-success HTTP status with the extracted error text.
    #[error("{text}")]
    Status { status: u16, text: String },
    /// The response body did not have the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Reading the response body failed part-way.
    #[error("stream error: {0}")]
    Stream(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) | Self::Stream(_) | Self::Unavailable => None,
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
