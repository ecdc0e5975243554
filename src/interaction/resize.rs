// Shift Resize
//
// Dragging the bottom edge of a shift changes its end time; the start time
// stays put. Also resolves pointer positions to shift bodies and handles.

use crate::models::shift::{Shift, ShiftId, TimeRange};
use crate::services::grid::GridGeometry;
use crate::services::layout::ShiftLayout;

use super::PointerTarget;

/// Context for an active resize operation
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeContext {
    /// Shift as it was at pointer-down
    pub original: Shift,
    /// Last committed state of the shift
    pub shift: Shift,
    /// Pointer y matching `shift`'s current end
    pub anchor_y: f32,
}

impl ResizeContext {
    pub fn from_shift(shift: &Shift, pointer_y: f32) -> Self {
        Self {
            original: shift.clone(),
            shift: shift.clone(),
            anchor_y: pointer_y,
        }
    }

    /// Candidate interval for the pointer at `pointer_y`; the start never moves.
    pub fn candidate(&self, pointer_y: f32, grid: &GridGeometry) -> TimeRange {
        let range = self.shift.range();
        let height = grid.minutes_to_pixels(range.duration()) + (pointer_y - self.anchor_y);
        let snapped = grid.snap_to_grid(height);
        TimeRange::new(range.start, range.start + grid.pixels_to_minutes(snapped))
    }

    /// Record a committed resize so later deltas are measured from the new end.
    pub fn advance(&mut self, committed: Shift, grid: &GridGeometry) {
        let grown = committed.duration_minutes() - self.shift.duration_minutes();
        self.anchor_y += grid.minutes_to_pixels(grown);
        self.shift = committed;
    }

    pub fn has_resized(&self) -> bool {
        self.original.range() != self.shift.range()
    }
}

/// Height of the bottom-edge handle zone for a block of `height` pixels.
///
/// Small blocks give half their height to the handle so the body stays grabbable.
pub fn handle_zone(height: f32, handle_height: f32) -> f32 {
    handle_height.min(height / 2.0)
}

/// Resolve a pointer position within a day column.
///
/// `x_fraction` is the horizontal position across the column in `0.0..=1.0`
/// and `y` is pixels from the top of the day window. Handles win over bodies.
pub fn hit_test(
    layouts: &[ShiftLayout],
    x_fraction: f32,
    y: f32,
    handle_height: f32,
) -> PointerTarget {
    let in_column = |layout: &&ShiftLayout| {
        let left = layout.left_fraction();
        let last = layout.column + 1 == layout.total_columns;
        x_fraction >= left
            && (x_fraction < left + layout.width_fraction() || (last && x_fraction <= 1.0))
    };

    let mut body: Option<&ShiftId> = None;
    for layout in layouts.iter().filter(in_column) {
        if y < layout.top || y > layout.bottom() {
            continue;
        }
        if y >= layout.bottom() - handle_zone(layout.height, handle_height) {
            return PointerTarget::ResizeHandle(layout.shift_id.clone());
        }
        if body.is_none() {
            body = Some(&layout.shift_id);
        }
    }

    match body {
        Some(id) => PointerTarget::ShiftBody(id.clone()),
        None => PointerTarget::EmptyGrid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn shift(start: &str, end: &str) -> Shift {
        Shift::new(
            "a",
            "Post",
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            start.parse().unwrap(),
            end.parse().unwrap(),
        )
        .unwrap()
    }

    fn layout(id: &str, column: usize, total: usize, top: f32, height: f32) -> ShiftLayout {
        ShiftLayout {
            shift_id: ShiftId::new(id),
            column,
            total_columns: total,
            top,
            height,
        }
    }

    #[test]
    fn test_candidate_grows_from_anchor() {
        let grid = GridGeometry::default();
        // 09:00-10:00, bottom edge at 600px
        let ctx = ResizeContext::from_shift(&shift("09:00", "10:00"), 600.0);
        assert_eq!(ctx.candidate(600.0, &grid), TimeRange::new(540, 600));
        assert_eq!(ctx.candidate(662.0, &grid), TimeRange::new(540, 660));
        assert_eq!(ctx.candidate(560.0, &grid), TimeRange::new(540, 570));
        assert_eq!(ctx.candidate(530.0, &grid), TimeRange::new(540, 540));
    }

    #[test]
    fn test_advance_moves_anchor_with_committed_end() {
        let grid = GridGeometry::default();
        let mut ctx = ResizeContext::from_shift(&shift("09:00", "10:00"), 605.0);
        let candidate = ctx.candidate(665.0, &grid);
        assert_eq!(candidate, TimeRange::new(540, 660));

        ctx.advance(shift("09:00", "11:00"), &grid);
        assert_eq!(ctx.anchor_y, 665.0);
        assert!(ctx.has_resized());
        // the same pointer position proposes the same end, not a doubled delta
        assert_eq!(ctx.candidate(665.0, &grid), TimeRange::new(540, 660));
    }

    #[test]
    fn test_handle_zone_small_block() {
        assert_eq!(handle_zone(10.0, 8.0), 5.0);
        assert_eq!(handle_zone(60.0, 8.0), 8.0);
    }

    #[test]
    fn test_hit_test_body_handle_and_empty() {
        let layouts = vec![layout("a", 0, 1, 540.0, 60.0)];
        assert_eq!(
            hit_test(&layouts, 0.5, 560.0, 8.0),
            PointerTarget::ShiftBody(ShiftId::new("a"))
        );
        assert_eq!(
            hit_test(&layouts, 0.5, 596.0, 8.0),
            PointerTarget::ResizeHandle(ShiftId::new("a"))
        );
        assert_eq!(hit_test(&layouts, 0.5, 700.0, 8.0), PointerTarget::EmptyGrid);
    }

    #[test]
    fn test_hit_test_respects_columns() {
        let layouts = vec![
            layout("a", 0, 2, 540.0, 120.0),
            layout("b", 1, 2, 600.0, 120.0),
        ];
        assert_eq!(
            hit_test(&layouts, 0.25, 620.0, 8.0),
            PointerTarget::ShiftBody(ShiftId::new("a"))
        );
        assert_eq!(
            hit_test(&layouts, 0.75, 620.0, 8.0),
            PointerTarget::ShiftBody(ShiftId::new("b"))
        );
        assert_eq!(hit_test(&layouts, 0.75, 560.0, 8.0), PointerTarget::EmptyGrid);
    }

    #[test]
    fn test_hit_test_column_edges_inclusive_at_right() {
        let layouts = vec![
            layout("a", 0, 2, 540.0, 120.0),
            layout("b", 1, 2, 540.0, 120.0),
        ];
        assert_eq!(
            hit_test(&layouts, 0.0, 560.0, 8.0),
            PointerTarget::ShiftBody(ShiftId::new("a"))
        );
        assert_eq!(
            hit_test(&layouts, 0.5, 560.0, 8.0),
            PointerTarget::ShiftBody(ShiftId::new("b"))
        );
        assert_eq!(
            hit_test(&layouts, 1.0, 560.0, 8.0),
            PointerTarget::ShiftBody(ShiftId::new("b"))
        );
        assert_eq!(hit_test(&layouts, 1.2, 560.0, 8.0), PointerTarget::EmptyGrid);
    }
}
