//! Blocking request executor and process-wide transport lifecycle.
//!
//! # Design
//! `get` and `post` each perform exactly one blocking transaction, funneled
//! through [`perform`]. The transport agent is configured with
//! `http_status_as_error(false)` so 4xx/5xx responses come back as data —
//! the `Result` discriminator reports transport outcomes only, matching a
//! transport that returns its own result code rather than an HTTP status.
//!
//! `init`/`cleanup` guard a shared agent behind a process-wide mutex.
//! Neither is required: executors fall back to a per-call agent, which makes
//! repeated or out-of-order lifecycle calls harmless.

use std::io::Read;
use std::sync::{Mutex, PoisonError};

use ureq::Agent;

use crate::error::HttpError;
use crate::http::{Method, Request, Response};
use crate::url::build_url;

/// Fixed headers sent on every POST. The caller is trusted to supply
/// JSON-shaped data; the non-standard plural `charsets` key is kept for
/// wire-level compatibility with existing consumers.
const POST_HEADERS: [(&str, &str); 3] = [
    ("Accept", "application/json"),
    ("Content-Type", "application/json"),
    ("charsets", "utf-8"),
];

static AGENT: Mutex<Option<Agent>> = Mutex::new(None);

fn default_agent() -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// Install the shared transport agent. Idempotent: a second call while the
/// agent is installed is a no-op.
pub fn init() {
    let mut slot = AGENT.lock().unwrap_or_else(PoisonError::into_inner);
    if slot.is_none() {
        *slot = Some(default_agent());
    }
}

/// Drop the shared transport agent. Safe without a prior `init` and safe to
/// call repeatedly; in-flight requests hold their own clone of the agent.
pub fn cleanup() {
    let mut slot = AGENT.lock().unwrap_or_else(PoisonError::into_inner);
    *slot = None;
}

fn agent() -> Agent {
    AGENT
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(default_agent)
}

/// Issue one blocking GET and return the status plus accumulated body.
pub fn get(host: &str, port: u16, path: &str) -> Result<Response, HttpError> {
    perform(&Request::get(host, port, path))
}

/// Issue one blocking POST with `json` as the body.
///
/// The body's exact byte length is declared to the transport up front (no
/// chunked encoding); an empty body declares zero length and is not an
/// error. The three fixed JSON headers are sent regardless of what `json`
/// actually contains.
pub fn post(host: &str, port: u16, path: &str, json: &str) -> Result<Response, HttpError> {
    perform(&Request::post(host, port, path, json.as_bytes().to_vec()))
}

/// Execute one blocking transaction described by `req`.
pub fn perform(req: &Request) -> Result<Response, HttpError> {
    let url = request_url(&build_url(&req.host, req.port, &req.path));
    let agent = agent();

    let mut response = match req.method {
        Method::Get => agent.get(&url).call()?,
        Method::Post => {
            let mut builder = agent.post(&url);
            for (key, value) in POST_HEADERS {
                builder = builder.header(key, value);
            }
            // A slice body declares Content-Length from its exact length.
            builder.send(req.body.as_deref().unwrap_or(&[]))?
        }
    };

    let status = response.status().as_u16();

    // The transport feeds the reader in chunks of its choosing; read_to_end
    // drains every chunk fully into the growable buffer. A mid-stream read
    // failure aborts the transfer with the buffer dropped.
    let mut body = Vec::new();
    response
        .body_mut()
        .as_reader()
        .read_to_end(&mut body)
        .map_err(HttpError::Read)?;

    Ok(Response { status, body })
}

/// The URL builder emits no scheme but the transport requires one; default
/// to `http://` when the built URL carries none, the same guess the
/// original transport made.
fn request_url(built: &str) -> String {
    if built.contains("://") {
        built.to_string()
    } else {
        format!("http://{built}")
    }
}
