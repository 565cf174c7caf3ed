//! Error types for the wire codec.

use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Errors raised while decoding varints, messages, or gRPC-Web frames.
///
/// A codec error aborts decoding of the response it came from and nothing
/// else; callers fall back to an empty status sample.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer ended before a varint's terminating byte
    #[error("Truncated varint at offset {offset}")]
    TruncatedVarint { offset: usize },

    /// The frame is shorter than the 5-byte header
    #[error("Invalid gRPC-web frame: {len} bytes, need at least 5")]
    InvalidFrame { len: usize },

    /// The flag byte does not mark a data frame
    #[error("Unexpected gRPC-web frame type 0x{0:02x}")]
    UnexpectedFrameType(u8),

    /// The header declares more payload than the buffer holds
    #[error("Truncated gRPC-web payload: declared {declared} bytes, {available} available")]
    TruncatedFrame { declared: usize, available: usize },

    /// A length-delimited field runs past the end of the message
    #[error("Truncated field {field}: declared {declared} bytes, {available} available")]
    TruncatedField {
        field: u8,
        declared: usize,
        available: usize,
    },
}
