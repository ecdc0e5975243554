//! Minute-precision wall clock time within a single day.
//!
//! `24:00` is representable so a shift can end exactly at midnight; it is
//! never a valid start.

use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("expected HH:MM, got {0:?}")]
    Format(String),
    #[error("time {0:?} is outside 00:00..=24:00")]
    OutOfRange(String),
    #[error("{0} minutes is outside the day")]
    MinutesOutOfRange(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);
    pub const END_OF_DAY: ClockTime = ClockTime(MINUTES_PER_DAY as u16);

    pub fn from_minutes(minutes: i64) -> Result<Self, TimeParseError> {
        if (0..=MINUTES_PER_DAY as i64).contains(&minutes) {
            Ok(Self(minutes as u16))
        } else {
            Err(TimeParseError::MinutesOutOfRange(minutes))
        }
    }

    /// Like [`from_minutes`](Self::from_minutes) but saturating at the day bounds.
    pub fn clamped(minutes: i64) -> Self {
        Self(minutes.clamp(0, MINUTES_PER_DAY as i64) as u16)
    }

    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeParseError> {
        if minute >= 60 {
            return Err(TimeParseError::OutOfRange(format!("{:02}:{:02}", hour, minute)));
        }
        Self::from_minutes((hour * 60 + minute) as i64)
    }

    pub fn minutes(&self) -> u32 {
        self.0 as u32
    }

    pub fn hour(&self) -> u32 {
        self.minutes() / 60
    }

    pub fn minute(&self) -> u32 {
        self.minutes() % 60
    }

    /// `None` for `24:00`, which chrono cannot represent.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(TimeParseError::Format(s.to_string()));
        }
        if s == "24:00" {
            return Ok(Self::END_OF_DAY);
        }
        match NaiveTime::parse_from_str(s, "%H:%M") {
            Ok(time) => Ok(time.into()),
            Err(_) if bytes.iter().enumerate().all(|(i, b)| i == 2 || b.is_ascii_digit()) => {
                Err(TimeParseError::OutOfRange(s.to_string()))
            }
            Err(_) => Err(TimeParseError::Format(s.to_string())),
        }
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
