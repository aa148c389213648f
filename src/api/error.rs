//! Error types for the launches API layer

use std::fmt;

/// Why a fetch of the launches endpoint failed
#[derive(Debug)]
pub enum FetchError {
    /// Request never produced a response (DNS, connect, timeout, ...)
    Network(String),
    /// Endpoint answered with a non-success status
    Status { status: u16, body: String },
    /// Response body was not a list of launch records
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "API error ({})", status)
                } else {
                    write!(f, "API error ({}): {}", status, body)
                }
            }
            Self::Decode(msg) => write!(f, "Failed to decode launches: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Accessor used without an enclosing provider scope
///
/// This is a wiring mistake rather than a runtime condition, so callers
/// propagate it instead of trying to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    OutsideProvider,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutsideProvider => write!(f, "useApi must be used within an ApiProvider"),
        }
    }
}

impl std::error::Error for ContextError {}
