// Settings module
// Grid geometry and editing policy for the schedule view

use serde::{Deserialize, Serialize};

use crate::models::shift::ClockTime;

/// Parameters of the scheduling grid.
///
/// Every field has a default so a partial TOML file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Quantum all snapping rounds to
    pub slot_minutes: u32,
    /// Pixel height of one slot
    pub slot_height: f32,
    pub day_start: ClockTime,
    pub day_end: ClockTime,
    pub min_duration_minutes: u32,
    pub max_duration_minutes: u32,
    /// Length of a shift created by clicking an empty cell
    pub default_shift_minutes: u32,
    pub allow_overlap: bool,
    /// Hit zone of the bottom-edge resize handle, in pixels
    pub resize_handle_height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            slot_minutes: 30,
            slot_height: 30.0,
            day_start: ClockTime::MIDNIGHT,
            day_end: ClockTime::END_OF_DAY,
            min_duration_minutes: 30,
            max_duration_minutes: 12 * 60,
            default_shift_minutes: 60,
            allow_overlap: false,
            resize_handle_height: 8.0,
        }
    }
}

impl GridConfig {
    /// Business-hours window, otherwise default.
    pub fn with_window(day_start: ClockTime, day_end: ClockTime) -> Self {
        Self {
            day_start,
            day_end,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.slot_minutes == 0 {
            return Err("Slot duration must be positive".to_string());
        }
        if !(self.slot_height > 0.0) {
            return Err("Slot height must be positive".to_string());
        }
        if self.day_end <= self.day_start {
            return Err("Day end must be after day start".to_string());
        }
        if self.min_duration_minutes == 0 || self.min_duration_minutes > self.max_duration_minutes {
            return Err("Minimum duration must be positive and not exceed the maximum".to_string());
        }
        for (name, minutes) in [
            ("Day start", self.day_start.minutes()),
            ("Day end", self.day_end.minutes()),
            ("Minimum duration", self.min_duration_minutes),
            ("Maximum duration", self.max_duration_minutes),
            ("Default shift length", self.default_shift_minutes),
        ] {
            if minutes % self.slot_minutes != 0 {
                return Err(format!(
                    "{} must be a multiple of {} minutes",
                    name, self.slot_minutes
                ));
            }
        }
        if self.default_shift_minutes < self.min_duration_minutes
            || self.default_shift_minutes > self.max_duration_minutes
        {
            return Err("Default shift length must respect the duration bounds".to_string());
        }
        if self.window_minutes() < self.default_shift_minutes as i32 {
            return Err("Day window is shorter than the default shift length".to_string());
        }
        if self.resize_handle_height < 0.0 {
            return Err("Resize handle height cannot be negative".to_string());
        }
        Ok(())
    }

    pub fn day_start_minutes(&self) -> i32 {
        self.day_start.minutes() as i32
    }

    pub fn day_end_minutes(&self) -> i32 {
        self.day_end.minutes() as i32
    }

    pub fn window_minutes(&self) -> i32 {
        self.day_end_minutes() - self.day_start_minutes()
    }
}
