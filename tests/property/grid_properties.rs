// Property-based tests for grid conversion, overlap and layout invariants

#[path = "../fixtures/mod.rs"]
mod fixtures;

use proptest::prelude::*;
use shift_grid::models::settings::GridConfig;
use shift_grid::models::shift::{ClockTime, Shift};
use shift_grid::services::grid::GridGeometry;
use shift_grid::services::layout::{assign_columns, overlap_clusters};
use shift_grid::services::overlap::overlaps;
use shift_grid::services::validation::{validate_move, RejectReason};

/// Shift starting on a 15-minute boundary, 15 minutes to 6 hours long
fn arb_shift(id: usize) -> impl Strategy<Value = Shift> {
    (0..80u32, 1..=24u32).prop_map(move |(start_q, len_q)| {
        let start = start_q * 15;
        let end = (start + len_q * 15).min(24 * 60);
        Shift::builder()
            .id(format!("s{}", id))
            .date(fixtures::monday())
            .start(ClockTime::from_minutes(start as i64).unwrap())
            .end(ClockTime::from_minutes(end as i64).unwrap())
            .title("Prop")
            .build()
            .unwrap()
    })
}

fn arb_day() -> impl Strategy<Value = Vec<Shift>> {
    (0..12usize).prop_flat_map(|n| (0..n).map(arb_shift).collect::<Vec<_>>())
}

proptest! {
    /// Property: every on-grid time survives minutes and back
    #[test]
    fn prop_minutes_round_trip(slot in 0..=48i64) {
        let grid = GridGeometry::default();
        let time = ClockTime::from_minutes(slot * 30).unwrap();
        prop_assert_eq!(grid.minutes_to_time(grid.time_to_minutes(time)).unwrap(), time);
    }

    /// Property: text form round-trips for every minute of the day
    #[test]
    fn prop_clock_text_round_trip(minutes in 0..=1440i64) {
        let time = ClockTime::from_minutes(minutes).unwrap();
        prop_assert_eq!(time.to_string().parse::<ClockTime>().unwrap(), time);
    }

    /// Property: snapping twice equals snapping once
    #[test]
    fn prop_snap_idempotent(minutes in 0..=1440i64, pixels in -200.0f32..2000.0) {
        let grid = GridGeometry::default();
        let once = grid.snap_time_to_grid(ClockTime::from_minutes(minutes).unwrap());
        prop_assert_eq!(grid.snap_time_to_grid(once), once);

        let px = grid.snap_to_grid(pixels);
        prop_assert_eq!(grid.snap_to_grid(px), px);
    }

    /// Property: pixel round trip is exact on slot multiples
    #[test]
    fn prop_pixels_exact_on_slots(slots in 0..=48i32, height in prop::sample::select(vec![20.0f32, 30.0, 48.0])) {
        let grid = GridGeometry::new(30, height);
        let minutes = slots * 30;
        prop_assert_eq!(grid.pixels_to_minutes(grid.minutes_to_pixels(minutes)), minutes);
    }

    /// Property: overlap is symmetric
    #[test]
    fn prop_overlap_symmetric(a in arb_shift(0), b in arb_shift(1)) {
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    /// Property: columns are in range and unique within a cluster
    #[test]
    fn prop_layout_complete(day in arb_day()) {
        let columns = assign_columns(&day);
        prop_assert_eq!(columns.len(), day.len());
        for c in &columns {
            prop_assert!(c.column < c.total_columns);
        }
        for cluster in overlap_clusters(&day) {
            let mut cols: Vec<usize> = cluster.iter().map(|&i| columns[i].column).collect();
            cols.sort();
            cols.dedup();
            prop_assert_eq!(cols.len(), cluster.len());
            for &i in &cluster {
                prop_assert_eq!(columns[i].total_columns, cluster.len());
            }
        }
    }

    /// Property: a duration rejection is never overridden by the overlap policy
    #[test]
    fn prop_duration_rejection_is_final(day in arb_day(), start in 0..1400i32, len in 0..29i32) {
        let config = GridConfig::default();
        let mover = fixtures::shift("mover", "00:00", "01:00");
        for allow_overlap in [false, true] {
            let result = validate_move(&mover, start, (start + len).max(start + 1), &day, allow_overlap, &config);
            prop_assert_eq!(result.reason, Some(RejectReason::DurationOutOfBounds));
        }
    }
}
