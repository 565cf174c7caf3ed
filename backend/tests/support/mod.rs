#![allow(dead_code)]

use outage_schedule::codec;

/// 48 slots with `off` slots set.
pub fn slots_with(off: impl IntoIterator<Item = usize>) -> Vec<bool> {
    let mut slots = vec![false; 48];
    for i in off {
        slots[i] = true;
    }
    slots
}

/// Response body as the status service sends it: data frame + trailer.
pub fn response_body(statuses: &[bool]) -> Vec<u8> {
    codec::encode_response_body(statuses)
}

/// Hand-assembled response message: an unrelated varint field (field 2)
/// followed by the packed status field.
pub fn message_with_unknown_field(statuses: &[bool]) -> Vec<u8> {
    let mut message = vec![0x10, 0xac, 0x02];
    message.push(0x0a);
    codec::varint::write_varint(&mut message, statuses.len() as u32);
    message.extend(statuses.iter().map(|&b| u8::from(b)));
    message
}

/// `(start, end)` clock strings of each interval.
pub fn interval_labels(intervals: &[outage_schedule::models::OutageInterval]) -> Vec<(String, String)> {
    intervals
        .iter()
        .map(|i| (i.start.to_string(), i.end.to_string()))
        .collect()
}

pub fn pair(start: &str, end: &str) -> (String, String) {
    (start.to_string(), end.to_string())
}
