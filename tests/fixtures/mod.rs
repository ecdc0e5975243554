// Test fixtures - reusable shift data shared by the integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use shift_grid::models::shift::{Shift, ShiftId};

/// Monday used by every fixture
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

/// Shift on [`monday`] from `start` to `end` ("HH:MM")
pub fn shift(id: &str, start: &str, end: &str) -> Shift {
    Shift::builder()
        .id(id)
        .date(monday())
        .start(start.parse().unwrap())
        .end(end.parse().unwrap())
        .title(format!("Post {}", id))
        .site("site-1")
        .build()
        .unwrap()
}

pub fn id(raw: &str) -> ShiftId {
    ShiftId::new(raw)
}

/// A typical day at one site: day watch, lunch relief, overlapping evening cover
pub fn busy_day() -> Vec<Shift> {
    vec![
        shift("day", "07:00", "15:00"),
        shift("relief", "12:00", "13:00"),
        shift("evening", "14:00", "22:00"),
        shift("night", "22:00", "24:00"),
    ]
}
