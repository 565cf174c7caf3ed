//! Canonical day schedule types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of half-hour slots in a day.
pub const SLOTS_PER_DAY: usize = 48;

/// Number of hours in a day (two slots each).
pub const HOURS_PER_DAY: usize = SLOTS_PER_DAY / 2;

/// Exactly 48 outage flags, one per half-hour of a day.
///
/// Slot `i` starts at `i / 2` hours and `(i % 2) * 30` minutes; `true`
/// means the power is scheduled to be off during that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<bool>", into = "Vec<bool>")]
pub struct CanonicalSchedule([bool; SLOTS_PER_DAY]);

impl CanonicalSchedule {
    pub fn new(slots: [bool; SLOTS_PER_DAY]) -> Self {
        Self(slots)
    }

    /// Schedule with every slot powered on.
    pub fn all_on() -> Self {
        Self([false; SLOTS_PER_DAY])
    }

    pub fn slots(&self) -> &[bool; SLOTS_PER_DAY] {
        &self.0
    }

    pub fn get(&self, slot: usize) -> bool {
        self.0.get(slot).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    pub fn off_slot_count(&self) -> usize {
        self.0.iter().filter(|&&off| off).count()
    }

    pub fn has_outages(&self) -> bool {
        self.0.contains(&true)
    }

    /// The 24 `(first half, second half)` pairs rendered as grid rows.
    pub fn hourly_rows(&self) -> [(bool, bool); HOURS_PER_DAY] {
        std::array::from_fn(|h| (self.0[2 * h], self.0[2 * h + 1]))
    }
}

impl Default for CanonicalSchedule {
    fn default() -> Self {
        Self::all_on()
    }
}

impl From<CanonicalSchedule> for Vec<bool> {
    fn from(schedule: CanonicalSchedule) -> Self {
        schedule.0.to_vec()
    }
}

impl TryFrom<Vec<bool>> for CanonicalSchedule {
    type Error = String;

    fn try_from(slots: Vec<bool>) -> Result<Self, Self::Error> {
        let len = slots.len();
        let slots: [bool; SLOTS_PER_DAY] = slots
            .try_into()
            .map_err(|_| format!("expected {} slots, got {}", SLOTS_PER_DAY, len))?;
        Ok(Self(slots))
    }
}

/// Slot boundary in `0..=48`, displayed as a clock time.
///
/// Boundary 48 is the end of the day and renders as `"24:00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalfHourLabel(usize);

impl HalfHourLabel {
    /// Create a label; indices past the end of the day clamp to 48.
    pub fn new(slot: usize) -> Self {
        Self(slot.min(SLOTS_PER_DAY))
    }

    pub fn slot(&self) -> usize {
        self.0
    }
}

impl fmt::Display for HalfHourLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= SLOTS_PER_DAY {
            return f.write_str("24:00");
        }
        let minutes = if self.0 % 2 == 0 { "00" } else { "30" };
        write!(f, "{:02}:{}", self.0 / 2, minutes)
    }
}

impl FromStr for HalfHourLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| format!("invalid half-hour label '{}'", s))?;
        let hours: usize = hours
            .parse()
            .map_err(|_| format!("invalid hour in '{}'", s))?;
        let half = match minutes {
            "00" => 0,
            "30" => 1,
            _ => return Err(format!("minutes must be 00 or 30 in '{}'", s)),
        };
        match hours.checked_mul(2).and_then(|h| h.checked_add(half)) {
            Some(slot) if slot <= SLOTS_PER_DAY => Ok(Self(slot)),
            _ => Err(format!("'{}' is past the end of the day", s)),
        }
    }
}

impl Serialize for HalfHourLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HalfHourLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A maximal run of powered-off slots, `[start, end)`.
///
/// `start < end` always holds; deserialization rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IntervalBounds")]
pub struct OutageInterval {
    pub start: HalfHourLabel,
    pub end: HalfHourLabel,
}

#[derive(Deserialize)]
struct IntervalBounds {
    start: HalfHourLabel,
    end: HalfHourLabel,
}

impl TryFrom<IntervalBounds> for OutageInterval {
    type Error = String;

    fn try_from(bounds: IntervalBounds) -> Result<Self, Self::Error> {
        if bounds.start >= bounds.end {
            return Err(format!(
                "interval start {} is not before end {}",
                bounds.start, bounds.end
            ));
        }
        Ok(Self {
            start: bounds.start,
            end: bounds.end,
        })
    }
}

impl OutageInterval {
    pub fn new(start_slot: usize, end_slot: usize) -> Self {
        Self {
            start: HalfHourLabel::new(start_slot),
            end: HalfHourLabel::new(end_slot),
        }
    }

    /// Number of half-hour slots covered.
    pub fn slot_count(&self) -> usize {
        self.end.slot().saturating_sub(self.start.slot())
    }
}

impl fmt::Display for OutageInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.start, self.end)
    }
}
