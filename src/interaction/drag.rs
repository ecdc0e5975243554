use crate::models::shift::{Shift, TimeRange};
use crate::services::grid::GridGeometry;

/// State of a drag-to-move gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct DragContext {
    /// Shift as it was at pointer-down
    pub original: Shift,
    /// Last committed state of the shift
    pub shift: Shift,
    /// Pointer y minus the shift's top edge at pointer-down
    pub pointer_offset: f32,
}

impl DragContext {
    pub fn from_shift(shift: &Shift, pointer_y: f32, grid: &GridGeometry, day_start: i32) -> Self {
        let top = grid.time_to_pixels(shift.start_time, day_start);
        Self {
            original: shift.clone(),
            shift: shift.clone(),
            pointer_offset: pointer_y - top,
        }
    }

    /// Candidate interval for the pointer at `pointer_y`, keeping the duration.
    ///
    /// Both edges land on slot boundaries counted from the window start.
    pub fn candidate(&self, pointer_y: f32, grid: &GridGeometry, day_start: i32) -> TimeRange {
        let offset = grid.pixels_to_minutes(pointer_y - self.pointer_offset);
        let end_offset = grid.snap_minutes(offset + self.shift.duration_minutes());
        TimeRange::new(day_start + offset, day_start + end_offset)
    }

    pub fn has_moved(&self) -> bool {
        self.original.range() != self.shift.range()
    }
}
