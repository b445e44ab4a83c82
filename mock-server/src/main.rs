//! Standalone runner for the mock server.
//!
//! Serves the ping/echo/inspect/empty/binary routes on `PORT` (default
//! 3000) so the client helper can be poked at by hand.

use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    let listener = TcpListener::bind(addr).await?;
    println!("mock server listening on {addr}");
    mock_server::run(listener).await
}
