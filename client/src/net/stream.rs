//! Analysis response bodies: variant selection, incremental UTF-8 decoding,
//! and (in the browser) the chunk reader over `ReadableStream`.
//!
//! DESIGN
//! ======
//! The service answers either with a streamed text body or with a single
//! JSON `{ "result": ... }`. The variant is chosen once from `Content-Type`;
//! both end up driving the same reveal ticket in `state::chat`.

#[cfg(test)]
#[path = "stream_test.rs"]
mod stream_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(feature = "hydrate")]
use super::error::ApiError;

/// How an analysis response body must be consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseBody {
    /// Arbitrary text, read chunk by chunk in arrival order.
    ChunkedStream,
    /// `application/json` carrying the whole result at once.
    WholeResult,
}

impl ResponseBody {
    #[must_use]
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        if is_json(content_type) { Self::WholeResult } else { Self::ChunkedStream }
    }
}

/// Whether a `Content-Type` header names JSON.
#[must_use]
pub fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
}

/// Incremental UTF-8 decoder.
///
/// Bytes of a multi-byte character split across chunks are held back until
/// the rest arrives. Invalid sequences decode to U+FFFD.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    pending: Vec<u8>,
}

impl StreamDecoder {
    /// Decode `chunk`, returning all text that is complete so far.
    pub fn push(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);
        let mut out = String::new();
        let mut start = 0;
        while start < self.pending.len() {
            let rest = &self.pending[start..];
            match std::str::from_utf8(rest) {
                Ok(text) => {
                    out.push_str(text);
                    start = self.pending.len();
                }
                Err(err) => {
                    let valid = err.valid_up_to();
                    out.push_str(&String::from_utf8_lossy(&rest[..valid]));
                    match err.error_len() {
                        Some(bad) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            start += valid + bad;
                        }
                        None => {
                            // Incomplete trailing sequence: wait for more bytes.
                            start += valid;
                            break;
                        }
                    }
                }
            }
        }
        self.pending.drain(..start);
        out
    }

    /// Flush at end of stream. A dangling partial sequence becomes U+FFFD.
    pub fn finish(&mut self) -> String {
        let tail = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        tail
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

/// A fetched analysis, ready to be revealed.
#[cfg(feature = "hydrate")]
pub enum AnalysisReply {
    Whole(String),
    Chunked(ChunkReader),
}

/// Reader over a fetch response body.
#[cfg(feature = "hydrate")]
pub struct ChunkReader {
    reader: web_sys::ReadableStreamDefaultReader,
}

#[cfg(feature = "hydrate")]
impl ChunkReader {
    #[must_use]
    pub fn new(stream: &web_sys::ReadableStream) -> Self {
        let reader = stream.get_reader().unchecked_into::<web_sys::ReadableStreamDefaultReader>();
        Self { reader }
    }

    /// Next chunk, or `None` once the stream reports `done`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Stream`] if the underlying read rejects.
    pub async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, ApiError> {
        let result = wasm_bindgen_futures::JsFuture::from(self.reader.read())
            .await
            .map_err(|e| ApiError::Stream(js_error_text(&e)))?;
        let done = js_sys::Reflect::get(&result, &JsValue::from_str("done"))
            .map_err(|e| ApiError::Stream(js_error_text(&e)))?
            .as_bool()
            .unwrap_or(true);
        if done {
            return Ok(None);
        }
        let value = js_sys::Reflect::get(&result, &JsValue::from_str("value"))
            .map_err(|e| ApiError::Stream(js_error_text(&e)))?;
        Ok(Some(js_sys::Uint8Array::new(&value).to_vec()))
    }

    /// Stop reading and let the browser drop the rest of the body.
    pub fn cancel(&self) {
        let _ = self.reader.cancel();
    }
}

#[cfg(feature = "hydrate")]
fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
