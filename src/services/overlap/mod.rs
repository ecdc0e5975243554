//! Overlap detection between shifts.
//!
//! Intervals are half-open: a shift ending at 10:00 and one starting at
//! 10:00 do not conflict. Every conflict rule in the crate is built on
//! [`overlaps`].

use chrono::NaiveDate;

use crate::models::shift::{Shift, ShiftId, TimeRange};

/// Symmetric; a shift compared with itself overlaps, so callers exclude by id.
pub fn overlaps(a: &Shift, b: &Shift) -> bool {
    a.range().overlaps(&b.range())
}

/// Shifts on the same day as `shift`, other than itself, that share time with it.
pub fn overlapping_peers<'a>(shift: &Shift, all_shifts: &'a [Shift]) -> Vec<&'a Shift> {
    peers_for_range(&shift.id, shift.date, shift.range(), all_shifts)
}

/// Peers of a proposed interval for `id` on `date`, used to test a move before it happens.
pub fn peers_for_range<'a>(
    id: &ShiftId,
    date: NaiveDate,
    range: TimeRange,
    all_shifts: &'a [Shift],
) -> Vec<&'a Shift> {
    all_shifts
        .iter()
        .filter(|other| other.date == date && &other.id != id)
        .filter(|other| range.overlaps(&other.range()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::ClockTime;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn shift(id: &str, start: &str, end: &str) -> Shift {
        Shift::new(
            id,
            "Post",
            day(),
            start.parse::<ClockTime>().unwrap(),
            end.parse::<ClockTime>().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_adjacent_shifts_do_not_overlap() {
        let a = shift("a", "09:00", "10:00");
        let b = shift("b", "10:00", "11:00");
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&b, &a));
    }

    #[test]
    fn test_partial_overlap_is_symmetric() {
        let a = shift("a", "09:00", "11:00");
        let b = shift("b", "10:00", "12:00");
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = shift("a", "08:00", "16:00");
        let inner = shift("b", "12:00", "12:30");
        assert!(overlaps(&outer, &inner));
    }

    #[test]
    fn test_peers_exclude_self_and_other_days() {
        let a = shift("a", "09:00", "11:00");
        let b = shift("b", "10:00", "12:00");
        let mut elsewhere = shift("c", "09:00", "11:00");
        elsewhere.date = day().succ_opt().unwrap();
        let d = shift("d", "11:00", "12:00");
        let all = vec![a.clone(), b, elsewhere, d];

        let peers = overlapping_peers(&a, &all);
        let ids: Vec<_> = peers.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn test_peers_for_proposed_range() {
        let a = shift("a", "09:00", "10:00");
        let b = shift("b", "11:00", "12:00");
        let all = vec![a.clone(), b];

        assert!(peers_for_range(&a.id, day(), TimeRange::new(600, 660), &all).is_empty());
        assert_eq!(
            peers_for_range(&a.id, day(), TimeRange::new(630, 690), &all).len(),
            1
        );
    }
}
