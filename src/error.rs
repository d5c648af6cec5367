//! Host process errors.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
