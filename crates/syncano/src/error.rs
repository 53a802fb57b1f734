//! Error types for the syncano library.
//!
//! Remote failures are classified by HTTP status band into explicit variants
//! carrying the numeric status code. Everything below HTTP — transport
//! failures, body reads, JSON decoding, missing credentials — lands in
//! [`Error::Infrastructure`] with a human-readable message.

use thiserror::Error;

/// The unified error type for syncano operations.
///
/// Status-band variants are terminal and non-retryable at this layer; the
/// discriminant plus the carried status code allow callers to distinguish
/// client-caused from server-caused from transport-caused failures with an
/// exhaustive match.
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a 1xx status.
    #[error("informational response: HTTP {status}")]
    Informational { status: u16 },

    /// The server answered with a 3xx status.
    #[error("redirection response: HTTP {status}")]
    Redirection { status: u16 },

    /// The server rejected the request with a 4xx status.
    #[error("client error: HTTP {status}")]
    Client { status: u16 },

    /// The server failed with a 5xx status.
    #[error("server error: HTTP {status}")]
    Server { status: u16 },

    /// Transport, body-read, decode, or missing-credential failure.
    #[error("infrastructure error: {message}")]
    Infrastructure { message: String },
}

impl Error {
    /// Classify an HTTP status code into an error variant.
    ///
    /// Returns `None` for 2xx and for any code outside the four bands; those
    /// responses proceed to body decoding.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            400..=499 => Some(Error::Client { status }),
            500..=599 => Some(Error::Server { status }),
            300..=399 => Some(Error::Redirection { status }),
            100..=199 => Some(Error::Informational { status }),
            _ => None,
        }
    }

    /// Returns the HTTP status code for classified variants.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Informational { status }
            | Error::Redirection { status }
            | Error::Client { status }
            | Error::Server { status } => Some(*status),
            Error::Infrastructure { .. } => None,
        }
    }

    pub(crate) fn infrastructure(message: impl Into<String>) -> Self {
        Error::Infrastructure {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // DNS, TLS, connection, and timeout failures all surface here,
        // before any status classification runs.
        Error::Infrastructure {
            message: format!("request failed: {err}"),
        }
    }
}
