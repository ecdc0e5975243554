// Snapping to slot boundaries

use super::GridGeometry;
use crate::models::shift::ClockTime;

/// `floor(x + 0.5)`: halves go up, for negative values too.
pub fn round_half_up(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

impl GridGeometry {
    /// Nearest slot boundary in pixels.
    pub fn snap_to_grid(&self, pixels: f32) -> f32 {
        self.slots_at(pixels) as f32 * self.slot_height
    }

    pub fn snap_minutes(&self, minutes: i32) -> i32 {
        let slot = self.slot_minutes as i32;
        (2 * minutes + slot).div_euclid(2 * slot) * slot
    }

    /// Nearest slot boundary as a clock time, measured from midnight.
    pub fn snap_time_to_grid(&self, time: ClockTime) -> ClockTime {
        ClockTime::clamped(self.snap_minutes(time.minutes() as i32) as i64)
    }
}
