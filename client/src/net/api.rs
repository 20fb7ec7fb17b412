//! REST helpers for the remote auth/analysis service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Error text is extracted here the
//! way the service reports it; mapping to user-facing messages happens in
//! `util::failure`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Credentials, LoginResponse};
use crate::util::i18n::Language;

#[cfg(feature = "hydrate")]
use super::stream::{AnalysisReply, ChunkReader, ResponseBody};
#[cfg(feature = "hydrate")]
use super::types::{AnalysisResult, AnalyzeRequest};

/// Base URL of the remote service. Override at build time with
/// `TWEETMIND_API_BASE`.
pub const API_BASE: &str = match option_env!("TWEETMIND_API_BASE") {
    Some(base) => base,
    None => "http://18.217.211.86",
};

#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_PATH: &str = "/signup";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_PATH: &str = "/login";
#[cfg(any(test, feature = "hydrate"))]
const ANALYZE_PATH: &str = "/fetch-analyze";

/// Shown when a failed analysis response has an empty body.
#[cfg(any(test, feature = "hydrate"))]
const UNKNOWN_ERROR_TEXT: &str = "خطأ غير معروف";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", API_BASE.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Error text of a failed signup, read the way the service writes it.
#[cfg(any(test, feature = "hydrate"))]
fn signup_error_text(content_type: Option<&str>, body: &str) -> String {
    if super::stream::is_json(content_type) {
        return match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => ["error", "message"]
                .into_iter()
                .filter_map(|key| value.get(key).and_then(serde_json::Value::as_str))
                .find(|s| !s.is_empty())
                .unwrap_or("Signup failed")
                .to_owned(),
            Err(_) => "Invalid server response format".to_owned(),
        };
    }
    if body.is_empty() { "Unexpected server response".to_owned() } else { body.to_owned() }
}

/// Error text of a failed analysis request.
#[cfg(any(test, feature = "hydrate"))]
fn analysis_error_text(body: &str) -> String {
    if body.is_empty() { UNKNOWN_ERROR_TEXT.to_owned() } else { body.to_owned() }
}

/// Create an account via `POST /signup`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with the service's error text on a non-OK
/// status, or [`ApiError::Transport`] if the request fails.
pub async fn signup(credentials: &Credentials, lang: Language) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(SIGNUP_PATH))
            .header("Accept-Language", lang.code())
            .json(credentials)?
            .send()
            .await?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let content_type = resp.headers().get("content-type");
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status { status, text: signup_error_text(content_type.as_deref(), &body) })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credentials, lang);
        Err(ApiError::Unavailable)
    }
}

/// Sign in via `POST /login`.
///
/// A success response may still lack a token; callers decide what that means.
///
/// # Errors
///
/// Returns [`ApiError::Status`] on a non-OK status, or
/// [`ApiError::Transport`] if the request fails.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(LOGIN_PATH))
            .json(credentials)?
            .send()
            .await?;
        let body = resp.text().await.unwrap_or_default();
        let parsed = LoginResponse::parse(&body);
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status(), text: parsed.error_text().to_owned() });
        }
        Ok(parsed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Request an analysis of `username` via `POST /fetch-analyze`.
///
/// JSON responses are read whole; anything else is handed back as a
/// [`ChunkReader`] so the caller can reveal it as it arrives.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with the body text (or a fixed fallback when
/// empty) on a non-OK status, [`ApiError::Decode`] for a malformed JSON body,
/// and [`ApiError::Transport`] if the request fails.
#[cfg(feature = "hydrate")]
pub async fn fetch_analyze(token: &str, username: &str, lang: Language) -> Result<AnalysisReply, ApiError> {
    let payload = AnalyzeRequest { username: username.to_owned(), lan: lang.code().to_owned() };
    let resp = gloo_net::http::Request::post(&endpoint(ANALYZE_PATH))
        .header("Authorization", &bearer(token))
        .json(&payload)?
        .send()
        .await?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, text: analysis_error_text(&body) });
    }

    let content_type = resp.headers().get("content-type");
    match ResponseBody::from_content_type(content_type.as_deref()) {
        ResponseBody::WholeResult => {
            let parsed: AnalysisResult = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(AnalysisReply::Whole(parsed.result))
        }
        ResponseBody::ChunkedStream => {
            let stream = resp
                .body()
                .ok_or_else(|| ApiError::Stream("response has no body".to_owned()))?;
            Ok(AnalysisReply::Chunked(ChunkReader::new(&stream)))
        }
    }
}
