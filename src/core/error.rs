//! Error types and handling for the MCP server.
//!
//! A unified error type over the domain errors and external failures. Tool
//! and resource reads turn remote failures into diagnostic text, so this type
//! mostly shows up on the startup path.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the remote API client.
    #[error("Remote API error: {0}")]
    Swapi(#[from] crate::domains::swapi::SwapiError),

    /// Error starting or running a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::swapi::SwapiError;

    #[test]
    fn test_swapi_error_converts() {
        let err: Error = SwapiError::Client("no TLS backend".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Remote API error: Failed to build HTTP client: no TLS backend"
        );
    }
}
