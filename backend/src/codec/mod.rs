//! Hand-written gRPC-Web codec for the status service.
//!
//! The codec is shared by every caller (the status client, the server
//! handlers, and tests) and depends on nothing outside this module.
//!
//! - [`varint`]: base-128 varints
//! - [`message`]: the single-field status request/response messages
//! - [`frame`]: the 5-byte gRPC-Web frame header
//!
//! ```
//! use outage_schedule::codec;
//!
//! let request = codec::frame::wrap(&codec::message::encode_status_request("31"));
//! assert_eq!(request, vec![0x00, 0, 0, 0, 4, 0x0a, 0x02, b'3', b'1']);
//! ```

pub mod error;
pub mod frame;
pub mod message;
pub mod varint;

pub use error::{CodecError, CodecResult};
pub use frame::{unwrap, wrap, WireFrame};
pub use message::{
    decode_status_request, decode_status_response, encode_status_request, encode_status_response,
    WireMessage,
};
pub use varint::{decode_varint, encode_varint};

/// Frame a status request for `queue`, ready to POST.
pub fn encode_request_frame(queue: &str) -> Vec<u8> {
    wrap(&encode_status_request(queue))
}

/// Unwrap a response frame and decode its status flags.
pub fn decode_response_frame(buffer: &[u8]) -> CodecResult<Vec<bool>> {
    decode_status_response(unwrap(buffer)?)
}

/// Build a complete response body: a data frame followed by an OK trailer.
pub fn encode_response_body(statuses: &[bool]) -> Vec<u8> {
    let mut body = wrap(&encode_status_response(statuses));
    body.extend(WireFrame::trailer(0, None).encode());
    body
}
