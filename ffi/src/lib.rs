//! C-ABI wrapper around `httpc-core`.
//!
//! # Overview
//! Exposes the HTTP client helper through `extern "C"` functions: blocking
//! `http_get`/`http_post` with an out-param response string, `http_parse_url`
//! with four independently owned out-params, and the process-wide
//! `http_global_init`/`http_global_cleanup` lifecycle.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Calls return 0 on success and a negative `HTTPC_ERR_*` code otherwise;
//!   on failure no out-param is written.
//! - The C caller owns every returned string and must release each one with
//!   `http_free_string`.
//! - A response whose body cannot be represented as a C string (invalid
//!   UTF-8 or interior NUL bytes) fails with `HTTPC_ERR_ENCODING` rather
//!   than truncating at the first NUL.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::panic::catch_unwind;

use httpc_core::Response;

use types::*;

/// Read a C string argument. `None` means null or invalid UTF-8.
unsafe fn cstr_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Convert a response into an owned C string written through `out`.
fn write_response(resp: Response, out: *mut *mut c_char) -> c_int {
    let text = match String::from_utf8(resp.body) {
        Ok(text) => text,
        Err(_) => return HTTPC_ERR_ENCODING,
    };
    match into_raw_c_string(text) {
        Some(raw) => {
            unsafe { *out = raw };
            HTTPC_OK
        }
        None => HTTPC_ERR_ENCODING,
    }
}

// ---------------------------------------------------------------------------
// Global lifecycle
// ---------------------------------------------------------------------------

/// Install the shared transport agent. Idempotent; safe to call repeatedly.
#[unsafe(no_mangle)]
pub extern "C" fn http_global_init() {
    let _ = catch_unwind(httpc_core::init);
}

/// Drop the shared transport agent. Safe without a prior init and safe to
/// call repeatedly.
#[unsafe(no_mangle)]
pub extern "C" fn http_global_cleanup() {
    let _ = catch_unwind(httpc_core::cleanup);
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Issue one blocking GET against `host:port/path`.
///
/// On success writes the response body through `out_response` (caller owns
/// it, release with `http_free_string`) and returns 0. On failure returns a
/// negative `HTTPC_ERR_*` code and leaves `out_response` untouched.
#[unsafe(no_mangle)]
pub extern "C" fn http_get(
    host: *const c_char,
    port: u16,
    path: *const c_char,
    out_response: *mut *mut c_char,
) -> c_int {
    catch_unwind(|| {
        if host.is_null() || path.is_null() || out_response.is_null() {
            return HTTPC_ERR_NULL_ARG;
        }
        let (host, path) = match unsafe { (cstr_arg(host), cstr_arg(path)) } {
            (Some(h), Some(p)) => (h, p),
            _ => return HTTPC_ERR_ENCODING,
        };
        match httpc_core::get(host, port, path) {
            Ok(resp) => write_response(resp, out_response),
            Err(err) => error_code(&err),
        }
    })
    .unwrap_or(HTTPC_ERR_PANIC)
}

/// Issue one blocking POST with `json` as the body.
///
/// The body's exact length is declared to the transport; the fixed JSON
/// headers are sent regardless of the body's actual content. Ownership and
/// error conventions match `http_get`.
#[unsafe(no_mangle)]
pub extern "C" fn http_post(
    host: *const c_char,
    port: u16,
    path: *const c_char,
    json: *const c_char,
    out_response: *mut *mut c_char,
) -> c_int {
    catch_unwind(|| {
        if host.is_null() || path.is_null() || json.is_null() || out_response.is_null() {
            return HTTPC_ERR_NULL_ARG;
        }
        let (host, path, json) =
            match unsafe { (cstr_arg(host), cstr_arg(path), cstr_arg(json)) } {
                (Some(h), Some(p), Some(j)) => (h, p, j),
                _ => return HTTPC_ERR_ENCODING,
            };
        match httpc_core::post(host, port, path, json) {
            Ok(resp) => write_response(resp, out_response),
            Err(err) => error_code(&err),
        }
    })
    .unwrap_or(HTTPC_ERR_PANIC)
}

// ---------------------------------------------------------------------------
// URL parsing
// ---------------------------------------------------------------------------

/// Split `url` into host, port, path, and query.
///
/// On success writes four independently owned values: three strings the
/// caller must release with `http_free_string`, plus the port. Missing
/// parts carry their defaults (port 80, path `/`, empty query). On failure
/// returns a negative code and writes nothing.
#[unsafe(no_mangle)]
pub extern "C" fn http_parse_url(
    url: *const c_char,
    out_host: *mut *mut c_char,
    out_port: *mut u16,
    out_path: *mut *mut c_char,
    out_query: *mut *mut c_char,
) -> c_int {
    catch_unwind(|| {
        if url.is_null()
            || out_host.is_null()
            || out_port.is_null()
            || out_path.is_null()
            || out_query.is_null()
        {
            return HTTPC_ERR_NULL_ARG;
        }
        let url = match unsafe { cstr_arg(url) } {
            Some(u) => u,
            None => return HTTPC_ERR_ENCODING,
        };

        let parsed = match httpc_core::parse_url(url) {
            Ok(parsed) => parsed,
            Err(err) => return error_code(&err),
        };

        let host = into_raw_c_string(parsed.host);
        let path = into_raw_c_string(parsed.path);
        let query = into_raw_c_string(parsed.query);
        match (host, path, query) {
            (Some(host), Some(path), Some(query)) => {
                unsafe {
                    *out_host = host;
                    *out_port = parsed.port;
                    *out_path = path;
                    *out_query = query;
                }
                HTTPC_OK
            }
            (host, path, query) => {
                // Partial output is not valid to consume; release whatever
                // was already allocated.
                for raw in [host, path, query].into_iter().flatten() {
                    drop(unsafe { CString::from_raw(raw) });
                }
                HTTPC_ERR_ENCODING
            }
        }
    })
    .unwrap_or(HTTPC_ERR_PANIC)
}

// ---------------------------------------------------------------------------
// Memory management
// ---------------------------------------------------------------------------

/// Release a string returned by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn http_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(ptr) });
        });
    }
}
