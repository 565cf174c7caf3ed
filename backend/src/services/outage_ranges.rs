//! Collapse a canonical schedule into outage intervals.

use crate::models::{CanonicalSchedule, HalfHourLabel, OutageInterval, SLOTS_PER_DAY};

/// Extract the maximal runs of powered-off slots as half-open intervals in
/// ascending order.
///
/// Position 48 acts as an "on" sentinel, so a run reaching the end of the
/// day closes at `24:00`.
pub fn extract(schedule: &CanonicalSchedule) -> Vec<OutageInterval> {
    let mut intervals = Vec::new();
    let mut start: Option<usize> = None;

    for i in 0..=SLOTS_PER_DAY {
        let off = i < SLOTS_PER_DAY && schedule.get(i);
        match (off, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                intervals.push(OutageInterval::new(s, i));
                start = None;
            }
            _ => {}
        }
    }

    intervals
}

/// Format a slot boundary as `HH:MM`; 48 renders as `"24:00"`.
pub fn format_half_hour(index: usize) -> String {
    HalfHourLabel::new(index).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule_with(off: impl IntoIterator<Item = usize>) -> CanonicalSchedule {
        let mut slots = [false; SLOTS_PER_DAY];
        for i in off {
            slots[i] = true;
        }
        CanonicalSchedule::new(slots)
    }

    fn labels(intervals: &[OutageInterval]) -> Vec<(String, String)> {
        intervals
            .iter()
            .map(|r| (r.start.to_string(), r.end.to_string()))
            .collect()
    }

    fn pair(start: &str, end: &str) -> (String, String) {
        (start.to_string(), end.to_string())
    }

    #[test]
    fn test_all_on_has_no_intervals() {
        assert!(extract(&CanonicalSchedule::all_on()).is_empty());
    }

    #[test]
    fn test_all_off_is_whole_day() {
        let intervals = extract(&CanonicalSchedule::new([true; SLOTS_PER_DAY]));
        assert_eq!(labels(&intervals), vec![pair("00:00", "24:00")]);
    }

    #[test]
    fn test_single_run() {
        let intervals = extract(&schedule_with(10..=13));
        assert_eq!(labels(&intervals), vec![pair("05:00", "07:00")]);
    }

    #[test]
    fn test_disjoint_runs_are_not_merged() {
        let intervals = extract(&schedule_with([2, 3, 5, 6, 7]));
        assert_eq!(
            labels(&intervals),
            vec![pair("01:00", "02:00"), pair("02:30", "04:00")]
        );
    }

    #[test]
    fn test_run_touching_both_ends() {
        let intervals = extract(&schedule_with([0, 47]));
        assert_eq!(
            labels(&intervals),
            vec![pair("00:00", "00:30"), pair("23:30", "24:00")]
        );
    }

    #[test]
    fn test_intervals_cover_exactly_the_off_slots() {
        let schedule = schedule_with([1, 4, 5, 6, 20, 21, 33, 40, 41, 42, 43]);
        let intervals = extract(&schedule);
        let covered: usize = intervals.iter().map(OutageInterval::slot_count).sum();
        assert_eq!(covered, schedule.off_slot_count());
        for pair in intervals.windows(2) {
            // a gap of at least one slot separates neighbours
            assert!(pair[0].end.slot() < pair[1].start.slot());
        }
        for interval in &intervals {
            assert!(interval.start < interval.end);
        }
    }

    #[test]
    fn test_format_half_hour() {
        assert_eq!(format_half_hour(0), "00:00");
        assert_eq!(format_half_hour(19), "09:30");
        assert_eq!(format_half_hour(48), "24:00");
    }
}
