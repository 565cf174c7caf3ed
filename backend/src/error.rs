//! Crate-level error type for fetch cycles and configuration.

use thiserror::Error;

use crate::codec::CodecError;

/// Result type for operations that can fail anywhere in a fetch cycle
pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The response body could not be decoded
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The request never produced a usable response body
    #[error("Transport failure{}: {message}", .status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default())]
    TransportFailure {
        status: Option<u16>,
        message: String,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ScheduleError {
    pub fn transport(message: impl Into<String>) -> Self {
        ScheduleError::TransportFailure {
            status: None,
            message: message.into(),
        }
    }

    pub fn http_status(status: u16) -> Self {
        ScheduleError::TransportFailure {
            status: Some(status),
            message: format!("gRPC request failed ({})", status),
        }
    }

    /// Transport failures may succeed on the next refresh; a response that
    /// failed to decode will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ScheduleError::TransportFailure { .. })
    }
}
