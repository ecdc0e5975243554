// Shift module
// Guard shift model bounded to a single day

mod clock;

pub use clock::{ClockTime, TimeParseError, MINUTES_PER_DAY};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque shift identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftId(pub String);

impl ShiftId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier given to shifts created on the grid before the host persists them.
    pub fn draft(sequence: u64) -> Self {
        Self(format!("draft-{}", sequence))
    }

    pub fn is_draft(&self) -> bool {
        self.0.starts_with("draft-")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShiftId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Half-open minute interval `[start, end)` within one day.
///
/// Minutes are signed so that candidates computed from a pointer above the
/// grid stay representable until validation rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub start: i32,
    pub end: i32,
}

impl TimeRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> i32 {
        self.end - self.start
    }

    /// Intervals that only touch at an endpoint do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

pub const DEFAULT_STATUS: &str = "scheduled";

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// A guard shift on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: ShiftId,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
}

impl Shift {
    /// Create a new shift with required fields
    ///
    /// # Examples
    /// ```
    /// use shift_grid::models::shift::{ClockTime, Shift};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    /// let start: ClockTime = "09:00".parse().unwrap();
    /// let end: ClockTime = "17:00".parse().unwrap();
    /// let shift = Shift::new("s-1", "Front gate", date, start, end).unwrap();
    /// assert_eq!(shift.duration_minutes(), 480);
    /// ```
    pub fn new(
        id: impl Into<ShiftId>,
        title: impl Into<String>,
        date: NaiveDate,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Result<Self, String> {
        let shift = Self {
            id: id.into(),
            date,
            start_time,
            end_time,
            title: title.into(),
            description: None,
            status: default_status(),
            site_id: None,
            staff_id: None,
        };
        shift.validate()?;
        Ok(shift)
    }

    pub fn builder() -> ShiftBuilder {
        ShiftBuilder::new()
    }

    /// Validate the shift
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Shift title cannot be empty".to_string());
        }

        if self.end_time <= self.start_time {
            return Err("Shift end time must be after start time".to_string());
        }

        Ok(())
    }

    pub fn range(&self) -> TimeRange {
        TimeRange::new(
            self.start_time.minutes() as i32,
            self.end_time.minutes() as i32,
        )
    }

    pub fn duration_minutes(&self) -> i32 {
        self.range().duration()
    }

    /// Copy of this shift with new bounds, keeping every other attribute.
    pub fn with_times(&self, start_time: ClockTime, end_time: ClockTime) -> Self {
        Self {
            start_time,
            end_time,
            ..self.clone()
        }
    }
}

impl From<String> for ShiftId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Builder for creating shifts with optional fields
#[derive(Default)]
pub struct ShiftBuilder {
    id: Option<ShiftId>,
    date: Option<NaiveDate>,
    start_time: Option<ClockTime>,
    end_time: Option<ClockTime>,
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    site_id: Option<String>,
    staff_id: Option<String>,
}

impl ShiftBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<ShiftId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn start(mut self, start: ClockTime) -> Self {
        self.start_time = Some(start);
        self
    }

    pub fn end(mut self, end: ClockTime) -> Self {
        self.end_time = Some(end);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn site(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    pub fn staff(mut self, staff_id: impl Into<String>) -> Self {
        self.staff_id = Some(staff_id.into());
        self
    }

    /// Build the shift
    pub fn build(self) -> Result<Shift, String> {
        let id = self.id.ok_or("Shift id is required")?;
        let date = self.date.ok_or("Shift date is required")?;
        let start_time = self.start_time.ok_or("Shift start time is required")?;
        let end_time = self.end_time.ok_or("Shift end time is required")?;

        let shift = Shift {
            id,
            date,
            start_time,
            end_time,
            title: self.title.unwrap_or_else(|| "Shift".to_string()),
            description: self.description,
            status: self.status.unwrap_or_else(default_status),
            site_id: self.site_id,
            staff_id: self.staff_id,
        };

        shift.validate()?;
        Ok(shift)
    }
}
