//! Unified error type.

use thiserror::Error;

/// The error type returned by the server's fallible operations.
///
/// Application-level outcomes (404, 400) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// infrastructure failures: parsing the bind address, binding to a port or
/// accepting a connection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bind address `{addr}`: {source}")]
    Addr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
