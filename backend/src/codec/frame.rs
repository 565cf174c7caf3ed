//! gRPC-Web binary framing.
//!
//! Every message travels inside a frame laid out as:
//!
//! ```text
//! +------+----------------------+-----------------+
//! | flag | length (u32, BE)     | payload         |
//! | 1 B  | 4 B                  | `length` bytes  |
//! +------+----------------------+-----------------+
//! ```
//!
//! Flag `0x00` marks a data frame and `0x80` a trailer frame. Frames are
//! message-agnostic: the payload is whatever the message codec produced.

use super::error::{CodecError, CodecResult};

/// Size of the flag byte plus the length field.
pub const FRAME_HEADER_LEN: usize = 5;

/// Flag byte of a data frame.
pub const DATA_FLAG: u8 = 0x00;
/// Flag byte accepted as data-bearing on the read path (compressed bit).
pub const COMPRESSED_DATA_FLAG: u8 = 0x01;
/// Flag byte of a trailer frame.
pub const TRAILER_FLAG: u8 = 0x80;

/// A single gRPC-Web frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireFrame {
    pub is_trailer: bool,
    pub payload: Vec<u8>,
}

impl WireFrame {
    pub fn data(payload: Vec<u8>) -> Self {
        Self {
            is_trailer: false,
            payload,
        }
    }

    /// Trailer frame carrying `grpc-status` (and `grpc-message` when given)
    /// as HTTP/1-style header lines.
    pub fn trailer(status: u32, message: Option<&str>) -> Self {
        let mut text = format!("grpc-status:{}\r\n", status);
        if let Some(message) = message {
            text.push_str(&format!("grpc-message:{}\r\n", message));
        }
        Self {
            is_trailer: true,
            payload: text.into_bytes(),
        }
    }

    pub fn flag(&self) -> u8 {
        if self.is_trailer {
            TRAILER_FLAG
        } else {
            DATA_FLAG
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        encode_frame(self.flag(), &self.payload)
    }
}

/// Wrap message bytes in a data frame.
pub fn wrap(message: &[u8]) -> Vec<u8> {
    encode_frame(DATA_FLAG, message)
}

fn encode_frame(flag: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(FRAME_HEADER_LEN + payload.len());
    out.push(flag);
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(payload);
    out
}

/// Extract the payload of the first data frame in `buffer`.
///
/// Bytes past the end of that frame, such as a trailer frame, are ignored.
pub fn unwrap(buffer: &[u8]) -> CodecResult<&[u8]> {
    if buffer.len() < FRAME_HEADER_LEN {
        return Err(CodecError::InvalidFrame { len: buffer.len() });
    }

    let flag = buffer[0];
    if flag != DATA_FLAG && flag != COMPRESSED_DATA_FLAG {
        return Err(CodecError::UnexpectedFrameType(flag));
    }

    let declared = u32::from_be_bytes([buffer[1], buffer[2], buffer[3], buffer[4]]) as usize;
    let available = buffer.len() - FRAME_HEADER_LEN;
    if declared > available {
        return Err(CodecError::TruncatedFrame {
            declared,
            available,
        });
    }

    Ok(&buffer[FRAME_HEADER_LEN..FRAME_HEADER_LEN + declared])
}
