//! Synchronous HTTP client helper.
//!
//! # Overview
//! Thin blocking wrappers around a general-purpose HTTP transport: [`get`]
//! and [`post`] issue one request against a host/port/path triple and return
//! the accumulated response body, [`parse_url`] splits a URL string into its
//! host, port, path, and query parts, and [`init`]/[`cleanup`] manage the
//! shared transport agent for the process lifetime.
//!
//! # Design
//! - `get`/`post` funnel through a plain-data `Request`, so the transport
//!   glue exists exactly once.
//! - Response bodies are owned `Vec<u8>` values; every call hands the caller
//!   an independent allocation.
//! - Non-2xx responses are data, not errors. Only transport-level failures
//!   (DNS, connect, handle setup, mid-stream read) surface as `Err`.
//! - `init` is optional: executors fall back to a per-call agent when the
//!   shared one has not been installed, so the configure-once lifecycle is
//!   honored without being mandatory.

pub mod client;
pub mod error;
pub mod http;
pub mod url;

pub use client::{cleanup, get, init, perform, post};
pub use error::HttpError;
pub use http::{Method, Request, Response};
pub use url::{build_url, parse_url, ParsedUrl};
