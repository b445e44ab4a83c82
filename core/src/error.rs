//! Error types for the HTTP client helper.
//!
//! # Design
//! Transport failures wrap the underlying `ureq::Error` whole rather than a
//! stringified copy, so the transport's own result code survives
//! untranslated. There is no variant for allocation failure: Rust's global
//! allocator aborts on OOM, which subsumes the abort-and-report paths a
//! manually managed growable buffer would need.

use std::fmt;
use std::io;

/// Errors returned by the request executor and the URL parser.
#[derive(Debug)]
pub enum HttpError {
    /// The input to `parse_url` was malformed or had no usable host.
    Parse(String),

    /// The transport could not set up or complete the transaction
    /// (DNS failure, connection refused, TLS failure, ...).
    Transport(ureq::Error),

    /// Reading the response body failed mid-stream; the transfer was
    /// aborted and no usable body exists.
    Read(io::Error),
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Parse(msg) => write!(f, "URL parse failed: {msg}"),
            HttpError::Transport(err) => write!(f, "transport failed: {err}"),
            HttpError::Read(err) => write!(f, "response read failed: {err}"),
        }
    }
}

impl std::error::Error for HttpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HttpError::Parse(_) => None,
            HttpError::Transport(err) => Some(err),
            HttpError::Read(err) => Some(err),
        }
    }
}

impl From<ureq::Error> for HttpError {
    fn from(err: ureq::Error) -> Self {
        HttpError::Transport(err)
    }
}
