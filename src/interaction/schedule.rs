//! The working set of shifts for the day on screen.
//!
//! Every change builds a new shift list and swaps it in whole, so a reader
//! never sees a half-updated set.

use chrono::NaiveDate;

use crate::models::shift::{Shift, ShiftId};

#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule {
    date: NaiveDate,
    shifts: Vec<Shift>,
}

impl DaySchedule {
    /// Shifts dated elsewhere are dropped; they belong to another day's set.
    pub fn new(date: NaiveDate, shifts: Vec<Shift>) -> Self {
        let (kept, dropped): (Vec<_>, Vec<_>) =
            shifts.into_iter().partition(|shift| shift.date == date);
        if !dropped.is_empty() {
            log::warn!(
                "Ignoring {} shift(s) not dated {} in day schedule",
                dropped.len(),
                date
            );
        }
        Self {
            date,
            shifts: kept,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn get(&self, id: &ShiftId) -> Option<&Shift> {
        self.shifts.iter().find(|shift| &shift.id == id)
    }

    pub fn contains(&self, id: &ShiftId) -> bool {
        self.get(id).is_some()
    }

    /// Swap in `updated` for the shift with the same id.
    pub fn replace(&mut self, updated: Shift) -> Result<(), String> {
        if !self.contains(&updated.id) {
            return Err(format!("Shift {} is not on this day", updated.id));
        }
        self.shifts = self
            .shifts
            .iter()
            .map(|shift| {
                if shift.id == updated.id {
                    updated.clone()
                } else {
                    shift.clone()
                }
            })
            .collect();
        Ok(())
    }

    pub fn insert(&mut self, shift: Shift) -> Result<(), String> {
        if shift.date != self.date {
            return Err(format!("Shift {} is dated {}, not {}", shift.id, shift.date, self.date));
        }
        if self.contains(&shift.id) {
            return Err(format!("Shift {} already exists", shift.id));
        }
        let mut next = self.shifts.clone();
        next.push(shift);
        self.shifts = next;
        Ok(())
    }

    pub fn remove(&mut self, id: &ShiftId) -> Result<Shift, String> {
        let removed = self
            .get(id)
            .cloned()
            .ok_or_else(|| format!("Shift {} is not on this day", id))?;
        self.shifts = self
            .shifts
            .iter()
            .filter(|shift| &shift.id != id)
            .cloned()
            .collect();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn shift(id: &str, start: &str, end: &str) -> Shift {
        Shift::new(id, "Post", day(), start.parse().unwrap(), end.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_new_drops_other_days() {
        let mut other = shift("x", "09:00", "10:00");
        other.date = day().succ_opt().unwrap();
        let schedule = DaySchedule::new(day(), vec![shift("a", "09:00", "10:00"), other]);
        assert_eq!(schedule.len(), 1);
        assert!(schedule.contains(&ShiftId::new("a")));
    }

    #[test]
    fn test_replace_keeps_order() {
        let mut schedule = DaySchedule::new(
            day(),
            vec![shift("a", "09:00", "10:00"), shift("b", "11:00", "12:00")],
        );
        schedule.replace(shift("a", "13:00", "14:00")).unwrap();
        let ids: Vec<_> = schedule.shifts().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(schedule.shifts()[0].start_time.to_string(), "13:00");
    }

    #[test]
    fn test_replace_unknown_fails() {
        let mut schedule = DaySchedule::new(day(), vec![]);
        assert!(schedule.replace(shift("a", "09:00", "10:00")).is_err());
    }

    #[test]
    fn test_insert_and_remove() {
        let mut schedule = DaySchedule::new(day(), vec![]);
        schedule.insert(shift("a", "09:00", "10:00")).unwrap();
        assert!(schedule.insert(shift("a", "11:00", "12:00")).is_err());

        let removed = schedule.remove(&ShiftId::new("a")).unwrap();
        assert_eq!(removed.id.as_str(), "a");
        assert!(schedule.is_empty());
        assert!(schedule.remove(&ShiftId::new("a")).is_err());
    }
}
