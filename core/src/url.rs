//! URL assembly and decomposition.
//!
//! # Design
//! `build_url` reproduces the helper's historical `host:port/path` shape:
//! no scheme is added or validated, and the leading slash run of `path` is
//! consumed before concatenation. `parse_url` goes the other way with
//! rust-url, guessing `http` when the input carries no scheme so bare hosts
//! like `wikipedia.com` still parse.

use url::Url;

use crate::error::HttpError;

/// Concatenate host, port, and path into `<host>:<port>/<path>`.
///
/// Any run of leading `/` characters in `path` is stripped first, so
/// `//a/b` contributes `a/b`; internal slashes are preserved. The host is
/// taken verbatim — a host that already embeds a scheme produces
/// `http://example.com:80/x` and is the caller's problem.
pub fn build_url(host: &str, port: u16, path: &str) -> String {
    let path = path.trim_start_matches('/');
    format!("{host}:{port}/{path}")
}

/// The four components of a decomposed URL. All fields are independently
/// owned; absent parts carry their documented defaults rather than `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub host: String,
    /// Explicit port, or the scheme's known default, or 80.
    pub port: u16,
    /// Canonical form; a URL with no path component parses to `/`.
    pub path: String,
    /// Empty string when the URL has no query.
    pub query: String,
}

/// Decompose a URL string into host, port, path, and query.
///
/// Inputs without a `://` are treated as `http://` URLs, mirroring the
/// scheme guessing of the underlying transport. Failure yields
/// [`HttpError::Parse`] and no partial output.
pub fn parse_url(input: &str) -> Result<ParsedUrl, HttpError> {
    let guessed;
    let absolute = if input.contains("://") {
        input
    } else {
        guessed = format!("http://{input}");
        &guessed
    };

    let url = Url::parse(absolute).map_err(|e| HttpError::Parse(e.to_string()))?;
    let host = url
        .host_str()
        .ok_or_else(|| HttpError::Parse(format!("no host in {input:?}")))?
        .to_string();

    Ok(ParsedUrl {
        host,
        port: url.port_or_known_default().unwrap_or(80),
        path: url.path().to_string(),
        query: url.query().unwrap_or("").to_string(),
    })
}
