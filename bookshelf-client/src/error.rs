//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Error for any failure to complete a network exchange with the
/// collection endpoint.
///
/// There is exactly one error kind at this boundary; the variants carry
/// diagnostic detail for logging, and callers treat them uniformly. All
/// variants are serializable for structured error reporting.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum TransportError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, broken body stream, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// The request timed out.
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// The server completed the exchange with a non-success status.
    /// Not-found falls under this variant.
    #[error("Server returned HTTP {status}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
    },

    /// The response body could not be decoded as the expected payload.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl TransportError {
    /// Whether the failure is an expected operational condition, used for
    /// log level classification.
    ///
    /// A non-success status means the exchange itself completed and should
    /// be logged at `warn`; connectivity and decoding failures use `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// Convenience type alias for `Result<T, TransportError>`.
pub type Result<T> = std::result::Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network() {
        let e = TransportError::Network("connection refused".to_string());
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = TransportError::Timeout("30s elapsed".to_string());
        assert_eq!(e.to_string(), "Request timeout: 30s elapsed");
    }

    #[test]
    fn display_status() {
        let e = TransportError::Status { status: 404 };
        assert_eq!(e.to_string(), "Server returned HTTP 404");
    }

    #[test]
    fn display_parse() {
        let e = TransportError::Parse("expected value at line 1".to_string());
        assert_eq!(
            e.to_string(),
            "Parse error: expected value at line 1"
        );
    }

    #[test]
    fn expected_status_only() {
        assert!(TransportError::Status { status: 500 }.is_expected());
        assert!(!TransportError::Network("x".into()).is_expected());
        assert!(!TransportError::Timeout("x".into()).is_expected());
        assert!(!TransportError::Parse("x".into()).is_expected());
    }

    #[test]
    fn serialize_carries_code_tag() {
        let e = TransportError::Status { status: 404 };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Status\""));
        assert!(json.contains("\"status\":404"));
    }
}
