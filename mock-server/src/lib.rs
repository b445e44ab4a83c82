use axum::{
    body::Bytes,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// What `/inspect` saw on an incoming request: the three headers the
/// client helper is expected to send, how the body length was framed
/// (`Content-Length` vs. `Transfer-Encoding`), and the received body length.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InspectReport {
    pub accept: Option<String>,
    pub content_type: Option<String>,
    pub charsets: Option<String>,
    pub content_length: Option<String>,
    pub transfer_encoding: Option<String>,
    pub body_len: usize,
}

pub fn app() -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/echo", post(echo))
        .route("/inspect", post(inspect))
        .route("/empty", get(empty))
        .route("/binary", get(binary))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn ping() -> &'static str {
    "pong"
}

async fn echo(body: Bytes) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}

async fn inspect(headers: HeaderMap, body: Bytes) -> Json<InspectReport> {
    let value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Json(InspectReport {
        accept: value("accept"),
        content_type: value("content-type"),
        charsets: value("charsets"),
        content_length: value("content-length"),
        transfer_encoding: value("transfer-encoding"),
        body_len: body.len(),
    })
}

async fn empty() -> StatusCode {
    StatusCode::OK
}

/// A body that no C string can carry: an interior NUL and invalid UTF-8.
async fn binary() -> Bytes {
    Bytes::from_static(b"ok\x00\xffbytes")
}
