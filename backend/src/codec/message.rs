//! Minimal protobuf-style messages for the status service.
//!
//! Both directions carry a single field numbered 1:
//!
//! - request: `string queue = 1;`
//! - response: `repeated bool status = 1 [packed = true];`
//!
//! Decoding is lenient. Unknown varint and length-delimited fields are
//! skipped, and an unrecognized wire type ends decoding with whatever has
//! been read so far.

use log::debug;

use super::error::{CodecError, CodecResult};
use super::varint::{decode_varint, varint_len, write_varint};

/// Field number used by both the request and the response.
pub const STATUS_FIELD: u8 = 1;

/// Varint scalar wire type.
pub const WIRE_TYPE_VARINT: u8 = 0;
/// Length-delimited wire type (strings, bytes, packed repeated fields).
pub const WIRE_TYPE_LEN: u8 = 2;

/// Build a single-byte tag for `field` and `wire_type`.
pub const fn tag(field: u8, wire_type: u8) -> u8 {
    (field << 3) | wire_type
}

/// Logical content of one status message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireMessage {
    /// Queue identifier, present on requests
    pub queue: Option<String>,
    /// Per-slot outage flags, present on responses
    pub statuses: Vec<bool>,
}

impl WireMessage {
    pub fn request(queue: impl Into<String>) -> Self {
        Self {
            queue: Some(queue.into()),
            statuses: Vec::new(),
        }
    }

    pub fn response(statuses: Vec<bool>) -> Self {
        Self {
            queue: None,
            statuses,
        }
    }

    /// Encode as a request when a queue is set, otherwise as a response.
    pub fn encode(&self) -> Vec<u8> {
        match &self.queue {
            Some(queue) => encode_status_request(queue),
            None => encode_status_response(&self.statuses),
        }
    }
}

/// Encode a status request for `queue`: `0x0A`, varint length, UTF-8 bytes.
pub fn encode_status_request(queue: &str) -> Vec<u8> {
    encode_len_field(STATUS_FIELD, queue.as_bytes())
}

/// Encode a status response with `statuses` as a packed varint field.
///
/// An empty slice produces an empty message, which decodes back to no data.
pub fn encode_status_response(statuses: &[bool]) -> Vec<u8> {
    if statuses.is_empty() {
        return Vec::new();
    }
    let packed: Vec<u8> = statuses.iter().map(|&off| u8::from(off)).collect();
    encode_len_field(STATUS_FIELD, &packed)
}

fn encode_len_field(field: u8, body: &[u8]) -> Vec<u8> {
    // Lengths past u32::MAX wrap, matching the varint encoder.
    let len = body.len() as u32;
    let mut out = Vec::with_capacity(1 + varint_len(len) + body.len());
    out.push(tag(field, WIRE_TYPE_LEN));
    write_varint(&mut out, len);
    out.extend_from_slice(body);
    out
}

/// Decode the packed booleans of a status response.
pub fn decode_status_response(bytes: &[u8]) -> CodecResult<Vec<bool>> {
    let mut statuses = Vec::new();
    walk_fields(bytes, |body| {
        let mut pos = 0;
        while pos < body.len() {
            let (value, read) = decode_varint(body, pos)?;
            statuses.push(value != 0);
            pos += read;
        }
        Ok(())
    })?;
    debug!("decoded {} status flags from {} bytes", statuses.len(), bytes.len());
    Ok(statuses)
}

/// Decode the queue identifier of a status request.
///
/// Returns `None` when the message carries no field 1. Invalid UTF-8 is
/// replaced rather than rejected, since the queue is opaque to the codec.
pub fn decode_status_request(bytes: &[u8]) -> CodecResult<Option<String>> {
    let mut queue = None;
    walk_fields(bytes, |body| {
        queue = Some(String::from_utf8_lossy(body).into_owned());
        Ok(())
    })?;
    Ok(queue)
}

/// Iterate the message's fields, handing each field-1 length-delimited body
/// to `on_status_field` and skipping everything else.
fn walk_fields<F>(bytes: &[u8], mut on_status_field: F) -> CodecResult<()>
where
    F: FnMut(&[u8]) -> CodecResult<()>,
{
    let mut pos = 0;

    while pos < bytes.len() {
        let tag = bytes[pos];
        pos += 1;
        let field = tag >> 3;
        let wire_type = tag & 0x07;

        match wire_type {
            WIRE_TYPE_LEN => {
                let (len, read) = decode_varint(bytes, pos)?;
                pos += read;
                let body = take(bytes, pos, len as usize, field)?;
                pos += body.len();
                if field == STATUS_FIELD {
                    on_status_field(body)?;
                }
            }
            WIRE_TYPE_VARINT => {
                let (_, read) = decode_varint(bytes, pos)?;
                pos += read;
            }
            other => {
                debug!("stopping at unsupported wire type {} (field {})", other, field);
                return Ok(());
            }
        }
    }

    Ok(())
}

fn take(bytes: &[u8], pos: usize, len: usize, field: u8) -> CodecResult<&[u8]> {
    let available = bytes.len() - pos;
    if len > available {
        return Err(CodecError::TruncatedField {
            field,
            declared: len,
            available,
        });
    }
    Ok(&bytes[pos..pos + len])
}
