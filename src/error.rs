//! Unified error type for the server's infrastructure.

use std::net::AddrParseError;

/// The error type returned by the server's fallible operations.
///
/// Request-level failures (404, 405, 500, ...) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type covers
/// binding the listener and similar process-level failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid listen address `{addr}`: {source}")]
    Address {
        addr: String,
        #[source]
        source: AddrParseError,
    },
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
