//! Time grid geometry.
//!
//! Converts between clock times, minute offsets and vertical pixel offsets
//! on a grid made of fixed-height slots. Pixel offsets are measured from the
//! top of the day window, so `time_to_pixels(day_start, day_start) == 0`.

mod snapping;

pub use snapping::round_half_up;

use crate::models::settings::GridConfig;
use crate::models::shift::{ClockTime, TimeParseError, MINUTES_PER_DAY};

/// Minute offsets saturate this far either side of the window start.
const MAX_OFFSET_MINUTES: i64 = 2 * MINUTES_PER_DAY as i64;

/// Slot quantum and its on-screen height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub slot_minutes: u32,
    pub slot_height: f32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::from_config(&GridConfig::default())
    }
}

impl GridGeometry {
    pub fn new(slot_minutes: u32, slot_height: f32) -> Self {
        Self {
            slot_minutes,
            slot_height,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.slot_minutes, config.slot_height)
    }

    fn pixels_per_minute(&self) -> f32 {
        self.slot_height / self.slot_minutes as f32
    }

    pub fn time_to_minutes(&self, time: ClockTime) -> i32 {
        time.minutes() as i32
    }

    pub fn minutes_to_time(&self, minutes: i32) -> Result<ClockTime, TimeParseError> {
        ClockTime::from_minutes(minutes as i64)
    }

    /// Exact; durations that are not slot multiples map to fractional pixels.
    pub fn minutes_to_pixels(&self, minutes: i32) -> f32 {
        minutes as f32 * self.pixels_per_minute()
    }

    /// Quantized to whole slots (round half up).
    pub fn pixels_to_minutes(&self, pixels: f32) -> i32 {
        let minutes = self.slots_at(pixels) as i64 * self.slot_minutes as i64;
        minutes.clamp(-MAX_OFFSET_MINUTES, MAX_OFFSET_MINUTES) as i32
    }

    pub fn time_to_pixels(&self, time: ClockTime, day_start_minutes: i32) -> f32 {
        self.minutes_to_pixels(self.time_to_minutes(time) - day_start_minutes)
    }

    pub fn pixels_to_time(
        &self,
        pixels: f32,
        day_start_minutes: i32,
    ) -> Result<ClockTime, TimeParseError> {
        self.minutes_to_time(day_start_minutes + self.pixels_to_minutes(pixels))
    }

    /// Number of slots from the window start to the boundary nearest `pixels`.
    pub(crate) fn slots_at(&self, pixels: f32) -> i32 {
        round_half_up(pixels / self.slot_height)
    }

    /// Height in pixels of the window `[day_start, day_end)`.
    pub fn day_height(&self, config: &GridConfig) -> f32 {
        self.minutes_to_pixels(config.window_minutes())
    }
}
