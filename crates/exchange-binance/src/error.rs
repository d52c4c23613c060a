//! Error types for the Binance futures integration.
//!
//! Every failure is one of four kinds: configuration (bad or missing
//! credentials), validation (bad order input, caught before any network
//! I/O), transport (network/timeout), or upstream (non-2xx reply from
//! Binance). Callers can pattern-match on the kind to decide recovery.

use thiserror::Error;

/// Errors that can occur when interacting with Binance futures.
#[derive(Debug, Error)]
pub enum BinanceError {
    /// Missing or invalid credentials at construction time.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required order field is missing or malformed. Raised before
    /// any network call.
    #[error("validation error: {0}")]
    Validation(String),

    /// Network failure, timeout, or connection refusal.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx HTTP status from Binance.
    #[error("upstream error (HTTP {status_code}): {message}")]
    Upstream {
        /// HTTP status code.
        status_code: u16,
        /// Binance error code (e.g. -1121), when the body was parseable.
        code: Option<i64>,
        /// Error message from Binance, or the raw response text when the
        /// body could not be parsed.
        message: String,
    },
}

impl BinanceError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates an upstream error from a parsed Binance error body.
    pub fn upstream(status_code: u16, code: i64, message: impl Into<String>) -> Self {
        Self::Upstream {
            status_code,
            code: Some(code),
            message: message.into(),
        }
    }

    /// Creates an upstream error carrying the raw response text.
    pub fn upstream_raw(status_code: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status_code,
            code: None,
            message: body.into(),
        }
    }

    /// Returns true if the failure may clear on its own (network issues
    /// and server-side errors). Retrying order placement can still
    /// duplicate an order; that risk is the caller's.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Upstream { status_code, .. } => *status_code >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for BinanceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport(format!("request timed out: {err}"))
        } else if err.is_connect() {
            Self::Transport(format!("connection failed: {err}"))
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Result type alias for Binance operations.
pub type Result<T> = std::result::Result<T, BinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Error Construction Tests ====================

    #[test]
    fn test_upstream_error_construction() {
        let err = BinanceError::upstream(400, -1121, "Invalid symbol.");
        assert!(matches!(
            err,
            BinanceError::Upstream {
                status_code: 400,
                code: Some(-1121),
                ..
            }
        ));
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("Invalid symbol."));
    }

    #[test]
    fn test_upstream_raw_has_no_code() {
        let err = BinanceError::upstream_raw(502, "<html>Bad Gateway</html>");
        assert!(matches!(
            err,
            BinanceError::Upstream { code: None, .. }
        ));
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = BinanceError::validation("Price is required for LIMIT orders");
        assert!(err.to_string().contains("validation"));
        assert!(err.to_string().contains("Price is required for LIMIT orders"));
    }

    #[test]
    fn test_configuration_error_display() {
        let err = BinanceError::configuration("BINANCE_API_KEY environment variable is required");
        assert!(err.to_string().contains("configuration"));
        assert!(err.to_string().contains("BINANCE_API_KEY"));
    }

    // ==================== Transience Tests ====================

    #[test]
    fn test_transport_error_is_transient() {
        let err = BinanceError::transport("connection refused");
        assert!(err.is_transient());
    }

    #[test]
    fn test_server_error_is_transient() {
        let err = BinanceError::upstream_raw(503, "service unavailable");
        assert!(err.is_transient());
    }

    #[test]
    fn test_client_error_is_not_transient() {
        let err = BinanceError::upstream(400, -1102, "Mandatory parameter was not sent");
        assert!(!err.is_transient());
    }

    #[test]
    fn test_validation_error_is_not_transient() {
        let err = BinanceError::validation("Quantity must be positive");
        assert!(!err.is_transient());
    }

    #[test]
    fn test_configuration_error_is_not_transient() {
        let err = BinanceError::configuration("missing credentials");
        assert!(!err.is_transient());
    }
}
