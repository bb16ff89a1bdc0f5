//! Remote API error types.

use thiserror::Error;

/// Errors that can occur while talking to the SWAPI endpoint.
#[derive(Debug, Error)]
pub enum SwapiError {
    /// The request did not complete within the configured timeout.
    #[error("timeout of {0}ms exceeded")]
    Timeout(u64),

    /// The remote could not be reached or the body could not be read.
    #[error("{0}")]
    Transport(String),

    /// The remote answered with a non-success status.
    #[error("Request failed with status code {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    /// The body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

impl SwapiError {
    /// Create a new transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new status error.
    pub fn status(status: u16, detail: Option<String>) -> Self {
        Self::Status { status, detail }
    }

    /// Create a new malformed-response error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_with_detail() {
        let err = SwapiError::status(404, Some("Not found".to_string()));
        assert_eq!(err.to_string(), "Request failed with status code 404: Not found");
        assert!(matches!(err, SwapiError::Status { status: 404, .. }));
    }

    #[test]
    fn test_status_message_without_detail() {
        let err = SwapiError::status(502, None);
        assert_eq!(err.to_string(), "Request failed with status code 502");
        assert!(matches!(err, SwapiError::Status { detail: None, .. }));
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(
            SwapiError::Timeout(10_000).to_string(),
            "timeout of 10000ms exceeded"
        );
    }
}
