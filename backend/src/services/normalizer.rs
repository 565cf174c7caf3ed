//! Canonicalization of raw status samples into a 48-slot day.
//!
//! The status source may report one flag per half-hour (48), one per hour
//! (24), nothing at all, or some other count. [`normalize`] maps every one
//! of those shapes onto a [`CanonicalSchedule`] and never fails.

use crate::models::{CanonicalSchedule, HOURS_PER_DAY, SLOTS_PER_DAY};

/// A raw status value that can be read as "power off".
///
/// Mirrors boolean coercion: zero is on, anything else is off, and a
/// missing value counts as on.
pub trait StatusFlag {
    fn is_off(&self) -> bool;
}

impl StatusFlag for bool {
    fn is_off(&self) -> bool {
        *self
    }
}

macro_rules! impl_status_flag_for_int {
    ($($t:ty),*) => {
        $(
            impl StatusFlag for $t {
                fn is_off(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_status_flag_for_int!(u8, u16, u32, u64, i32, i64);

impl<T: StatusFlag> StatusFlag for Option<T> {
    fn is_off(&self) -> bool {
        self.as_ref().is_some_and(StatusFlag::is_off)
    }
}

/// Map a raw sample of any length onto exactly 48 slots.
///
/// - 48 or more values: slot `i` takes `raw[i]`; extra values are ignored.
/// - exactly 24 values: both halves of hour `h` take `raw[h]`.
/// - any other non-zero count: indices clamp to the last value, so the
///   final known state repeats to the end of the day.
/// - no values: every slot is on.
pub fn normalize<T: StatusFlag>(raw: &[T]) -> CanonicalSchedule {
    let len = raw.len();
    let off = |i: usize| raw.get(i).is_some_and(StatusFlag::is_off);

    let mut slots = [false; SLOTS_PER_DAY];
    for h in 0..HOURS_PER_DAY {
        let (left, right) = if len >= SLOTS_PER_DAY {
            (off(2 * h), off(2 * h + 1))
        } else if len == HOURS_PER_DAY {
            let v = off(h);
            (v, v)
        } else if len > 0 {
            (off((2 * h).min(len - 1)), off((2 * h + 1).min(len - 1)))
        } else {
            (false, false)
        };
        slots[2 * h] = left;
        slots[2 * h + 1] = right;
    }

    CanonicalSchedule::new(slots)
}
