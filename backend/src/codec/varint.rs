//! Unsigned base-128 varints as used by the protobuf wire format.
//!
//! Values are 32 bits wide. Encoding a wider value keeps only its low 32
//! bits, and decoding drops any bits a sender placed above bit 31.

use super::error::{CodecError, CodecResult};

const CONTINUATION: u8 = 0x80;
const PAYLOAD_MASK: u8 = 0x7f;

/// Encode `value` as a varint, low-order group first.
pub fn encode_varint(value: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(varint_len(value));
    write_varint(&mut out, value);
    out
}

/// Encode a value that may exceed 32 bits. It is reduced modulo 2^32 first.
pub fn encode_varint_wrapping(value: u64) -> Vec<u8> {
    encode_varint(value as u32)
}

/// Append the varint encoding of `value` to `out`.
pub fn write_varint(out: &mut Vec<u8>, value: u32) {
    let mut v = value;
    while v >= u32::from(CONTINUATION) {
        out.push((v as u8 & PAYLOAD_MASK) | CONTINUATION);
        v >>= 7;
    }
    out.push(v as u8);
}

/// Number of bytes `encode_varint(value)` produces.
pub fn varint_len(value: u32) -> usize {
    match value {
        0..=0x7f => 1,
        0x80..=0x3fff => 2,
        0x4000..=0x1f_ffff => 3,
        0x20_0000..=0x0fff_ffff => 4,
        _ => 5,
    }
}

/// Decode a varint starting at `offset`.
///
/// Returns the value and the number of bytes consumed. Fails with
/// [`CodecError::TruncatedVarint`] when the buffer ends before a byte
/// without the continuation bit is found.
pub fn decode_varint(bytes: &[u8], offset: usize) -> CodecResult<(u32, usize)> {
    let mut result: u32 = 0;
    let mut shift: u32 = 0;

    for (consumed, &byte) in bytes.iter().skip(offset).enumerate() {
        if shift < u32::BITS {
            result |= u32::from(byte & PAYLOAD_MASK) << shift;
        }
        if byte & CONTINUATION == 0 {
            return Ok((result, consumed + 1));
        }
        shift += 7;
    }

    Err(CodecError::TruncatedVarint { offset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_single_byte() {
        assert_eq!(encode_varint(0), vec![0x00]);
        assert_eq!(encode_varint(1), vec![0x01]);
        assert_eq!(encode_varint(127), vec![0x7f]);
    }

    #[test]
    fn test_encode_multi_byte() {
        assert_eq!(encode_varint(128), vec![0x80, 0x01]);
        assert_eq!(encode_varint(300), vec![0xac, 0x02]);
        assert_eq!(encode_varint(16383), vec![0xff, 0x7f]);
        assert_eq!(encode_varint(16384), vec![0x80, 0x80, 0x01]);
        assert_eq!(encode_varint(u32::MAX), vec![0xff, 0xff, 0xff, 0xff, 0x0f]);
    }

    #[test]
    fn test_boundary_round_trips() {
        for (value, len) in [(0, 1), (127, 1), (128, 2), (16383, 2), (16384, 3), (u32::MAX, 5)] {
            let encoded = encode_varint(value);
            assert_eq!(encoded.len(), len, "length for {}", value);
            assert_eq!(decode_varint(&encoded, 0), Ok((value, len)));
        }
    }

    #[test]
    fn test_wrapping_encode() {
        assert_eq!(encode_varint_wrapping(1 << 32), encode_varint(0));
        assert_eq!(encode_varint_wrapping((1 << 32) + 5), encode_varint(5));
        assert_eq!(encode_varint_wrapping(u64::from(u32::MAX)), encode_varint(u32::MAX));
    }

    #[test]
    fn test_decode_at_offset() {
        let bytes = [0xff, 0xac, 0x02, 0x07];
        assert_eq!(decode_varint(&bytes, 1), Ok((300, 2)));
        assert_eq!(decode_varint(&bytes, 3), Ok((7, 1)));
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(decode_varint(&[], 0), Err(CodecError::TruncatedVarint { offset: 0 }));
        assert_eq!(
            decode_varint(&[0x80, 0x80], 0),
            Err(CodecError::TruncatedVarint { offset: 0 })
        );
        assert_eq!(decode_varint(&[0x01], 1), Err(CodecError::TruncatedVarint { offset: 1 }));
    }

    #[test]
    fn test_decode_drops_bits_above_32() {
        // 2^35 + 1 encoded as a 64-bit varint
        let bytes = [0x81, 0x80, 0x80, 0x80, 0x80, 0x01];
        assert_eq!(decode_varint(&bytes, 0), Ok((1, 6)));
    }

    proptest! {
        #[test]
        fn prop_varint_round_trip(value in any::<u32>()) {
            let encoded = encode_varint(value);
            prop_assert_eq!(encoded.len(), varint_len(value));
            prop_assert_eq!(decode_varint(&encoded, 0), Ok((value, encoded.len())));
        }
    }
}
