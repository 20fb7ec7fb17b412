//! Request/response bodies for the remote auth and analysis service.
//!
//! Field names follow the service's JSON (`dailyCount`, `lan`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /login` and `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /login` responses, success or not.
///
/// Every field is optional because an unparseable body is treated as `{}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(rename = "dailyCount", default, deserialize_with = "deserialize_count")]
    pub daily_count: u32,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Parse a login body, falling back to an empty response.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Server-provided reason for a failed login.
    #[must_use]
    pub fn error_text(&self) -> &str {
        [self.error.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("Login failed")
    }
}

/// Body of `POST /fetch-analyze`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest {
    pub username: String,
    pub lan: String,
}

/// Non-streamed analysis response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AnalysisResult {
    pub result: String,
}

/// Accept any non-negative number (or null) as a usage count.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(u32::try_from(int).unwrap_or(u32::MAX));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
            {
                return Ok(float.max(0.0).min(f64::from(u32::MAX)) as u32);
            }
            Err(D::Error::custom("expected a count"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
