//! Result codes and string helpers for the FFI boundary.
//!
//! # Design
//! The C surface reports outcomes as a plain `int`: 0 for success, a
//! negative code otherwise. Strings handed to C are `CString` allocations
//! whose ownership transfers to the caller; `http_free_string` is the only
//! valid way to release them.

use std::ffi::CString;
use std::os::raw::{c_char, c_int};

use httpc_core::HttpError;

/// The call succeeded.
pub const HTTPC_OK: c_int = 0;
/// A required pointer argument was null.
pub const HTTPC_ERR_NULL_ARG: c_int = -1;
/// The URL could not be parsed.
pub const HTTPC_ERR_PARSE: c_int = -2;
/// The transport could not set up or complete the transaction.
pub const HTTPC_ERR_TRANSPORT: c_int = -3;
/// A string could not cross the boundary (invalid UTF-8 in an argument, or
/// a response/component containing bytes a C string cannot carry).
pub const HTTPC_ERR_ENCODING: c_int = -4;
/// An internal panic was caught at the boundary.
pub const HTTPC_ERR_PANIC: c_int = -5;

pub(crate) fn error_code(err: &HttpError) -> c_int {
    match err {
        HttpError::Parse(_) => HTTPC_ERR_PARSE,
        HttpError::Transport(_) | HttpError::Read(_) => HTTPC_ERR_TRANSPORT,
    }
}

/// Move a Rust string to a heap allocation the C caller owns. Fails when
/// the string contains an interior NUL, which a C string cannot represent.
pub(crate) fn into_raw_c_string(s: String) -> Option<*mut c_char> {
    CString::new(s).ok().map(CString::into_raw)
}
