//! Error types for wallet dashboard operations.
//!
//! Fetch failures are recovered where they happen (logged, previous data
//! kept). Clipboard and malformed-field errors are shown inline. Everything
//! else bubbles up as a `color_eyre::Report`.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for fetching, formatting and copying transfer data.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Transport-level failure from the HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("Backend returned HTTP {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Writing to the system clipboard failed.
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// A single record field cannot be formatted for display.
    #[error("Malformed {field}: '{value}'")]
    MalformedRecord {
        /// The record field that failed (e.g. "time", "quantity").
        field: &'static str,
        /// The offending raw value.
        value: String,
    },

    /// Invalid user or configuration input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl WalletError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a malformed-record error for `field` holding `value`.
    #[must_use]
    pub fn malformed(field: &'static str, value: impl Into<String>) -> Self {
        Self::MalformedRecord {
            field,
            value: value.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================
