//! Plain-data HTTP request and response types.
//!
//! # Design
//! These types describe one HTTP transaction as plain owned data. `Request`
//! carries the host/port/path triple plus an optional body; `Response`
//! carries the status and the fully accumulated body. Bodies are `Vec<u8>`
//! rather than `String` because the helper treats them as opaque bytes —
//! the length field is authoritative, embedded zero bytes included.

use std::borrow::Cow;

/// HTTP method for a request. Only the two methods the helper issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One HTTP transaction described as plain data.
///
/// Built by the [`Request::get`]/[`Request::post`] constructors and executed
/// by [`crate::client::perform`].
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub host: String,
    pub port: u16,
    pub path: String,
    /// Request body, POST only. `None` for GET; `Some(vec![])` is a valid
    /// zero-length POST body.
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn get(host: &str, port: u16, path: &str) -> Self {
        Self {
            method: Method::Get,
            host: host.to_string(),
            port,
            path: path.to_string(),
            body: None,
        }
    }

    pub fn post(host: &str, port: u16, path: &str, body: Vec<u8>) -> Self {
        Self {
            method: Method::Post,
            host: host.to_string(),
            port,
            path: path.to_string(),
            body: Some(body),
        }
    }
}

/// The outcome of a successful transport round-trip.
///
/// `status` is the HTTP status code; the transport reports success even for
/// 4xx/5xx responses, so status interpretation is left to the caller. The
/// body is an independent allocation owned by the caller — an empty response
/// is `Vec::new()`, a defined value distinct from "no response at all."
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    /// Lossy UTF-8 view of the body for callers that expect text.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
