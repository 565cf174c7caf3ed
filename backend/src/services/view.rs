//! Render-ready result of one fetch cycle.

use serde::{Deserialize, Serialize};

use super::normalizer::{normalize, StatusFlag};
use super::outage_ranges::extract;
use crate::models::{CanonicalSchedule, OutageInterval, QueueId};

/// Everything a renderer needs for one queue: the 48-slot grid and the
/// outage list derived from it.
///
/// Deserializing keeps `queue`, `slots` and `has_data` and derives
/// `intervals` again from the slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredView")]
pub struct ScheduleView {
    pub queue: QueueId,
    pub slots: CanonicalSchedule,
    pub intervals: Vec<OutageInterval>,
    /// Whether the source reported any values at all
    pub has_data: bool,
}

#[derive(Deserialize)]
struct StoredView {
    queue: QueueId,
    slots: CanonicalSchedule,
    has_data: bool,
}

impl From<StoredView> for ScheduleView {
    fn from(stored: StoredView) -> Self {
        if !stored.has_data {
            return Self::no_data(stored.queue);
        }
        Self {
            queue: stored.queue,
            intervals: extract(&stored.slots),
            slots: stored.slots,
            has_data: true,
        }
    }
}

/// The three states the outage list can be in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutageSummary<'a> {
    /// The source returned nothing for this queue
    NoData,
    /// Data is present and no outage is planned
    NoOutages,
    Outages(&'a [OutageInterval]),
}

impl ScheduleView {
    /// Normalize `raw` and derive its outage intervals.
    pub fn from_raw<T: StatusFlag>(queue: QueueId, raw: &[T]) -> Self {
        let has_data = !raw.is_empty();
        let slots = normalize(raw);
        let intervals = if has_data { extract(&slots) } else { Vec::new() };
        Self {
            queue,
            slots,
            intervals,
            has_data,
        }
    }

    /// Fallback view used when a fetch fails.
    pub fn no_data(queue: QueueId) -> Self {
        Self {
            queue,
            slots: CanonicalSchedule::all_on(),
            intervals: Vec::new(),
            has_data: false,
        }
    }

    pub fn summary(&self) -> OutageSummary<'_> {
        if !self.has_data {
            OutageSummary::NoData
        } else if self.intervals.is_empty() {
            OutageSummary::NoOutages
        } else {
            OutageSummary::Outages(&self.intervals)
        }
    }
}
