//! Move/resize validation.
//!
//! Checks run in a fixed order and stop at the first failure: time range,
//! duration bounds, then conflicts. A rejection never touches the shift;
//! callers apply a candidate only when it is accepted.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::models::settings::GridConfig;
use crate::models::shift::{Shift, TimeRange};
use crate::services::overlap::peers_for_range;

/// Why a candidate was refused. Serialized as its message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    InvalidTimeRange,
    DurationOutOfBounds,
    Overlap,
}

impl RejectReason {
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::InvalidTimeRange => "Invalid time range",
            RejectReason::DurationOutOfBounds => "Shift duration out of bounds",
            RejectReason::Overlap => "Overlaps with another shift",
        }
    }
}

impl Serialize for RejectReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveValidation {
    pub valid: bool,
    pub reason: Option<RejectReason>,
}

impl MoveValidation {
    pub const ACCEPTED: MoveValidation = MoveValidation {
        valid: true,
        reason: None,
    };

    pub fn rejected(reason: RejectReason) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Validate moving or resizing `shift` to `[new_start, new_end)` minutes.
///
/// `all_shifts_for_day` may contain `shift` itself; it is skipped by id.
pub fn validate_move(
    shift: &Shift,
    new_start: i32,
    new_end: i32,
    all_shifts_for_day: &[Shift],
    allow_overlap: bool,
    config: &GridConfig,
) -> MoveValidation {
    if new_start < config.day_start_minutes()
        || new_start >= new_end
        || new_end > config.day_end_minutes()
    {
        return MoveValidation::rejected(RejectReason::InvalidTimeRange);
    }

    let duration = new_end - new_start;
    if duration < config.min_duration_minutes as i32 || duration > config.max_duration_minutes as i32
    {
        return MoveValidation::rejected(RejectReason::DurationOutOfBounds);
    }

    if !allow_overlap {
        let proposed = TimeRange::new(new_start, new_end);
        let peers = peers_for_range(&shift.id, shift.date, proposed, all_shifts_for_day);
        if !peers.is_empty() {
            return MoveValidation::rejected(RejectReason::Overlap);
        }
    }

    MoveValidation::ACCEPTED
}
