//! HTTP response classification.
//!
//! Every remote operation funnels its response through [`read_json`], which
//! either decodes the body into the requested type or produces exactly one
//! classified error. Status bands are checked before the body is touched;
//! on a band match the body is never read (dropping the response releases
//! the connection either way).

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::Error;

/// Classify a response by status, then read and decode its body.
///
/// Decision order on the status code: 4xx, 5xx, 3xx, 1xx each short-circuit
/// into the matching [`Error`] variant without consuming the body. Any other
/// code (2xx included) reads the full body and decodes it as JSON into `T`.
///
/// # Errors
///
/// Body-read failures and decode failures return [`Error::Infrastructure`];
/// decode failures carry the offending raw body and the target type name
/// for diagnostics.
pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let status = response.status().as_u16();
    trace!(status, "classifying response");

    if let Some(err) = Error::from_status(status) {
        return Err(err);
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::infrastructure(format!("failed to read response body: {e}")))?;

    decode_body(&bytes)
}

/// Decode a fully-read body into `T`, reporting the raw body on failure.
pub(crate) fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(bytes).map_err(|e| {
        Error::infrastructure(format!(
            "failed to decode response body as {}: {e}; body: {}",
            std::any::type_name::<T>(),
            String::from_utf8_lossy(bytes)
        ))
    })
}
