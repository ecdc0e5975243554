// Shift mutations and undo/redo
//
// Every committed change leaves the controller as a ShiftMutation for the
// host to persist. Finished gestures are also kept as commands so they can
// be undone and redone against the day schedule.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use super::schedule::DaySchedule;
use crate::models::shift::{ClockTime, Shift, ShiftId};

/// Outbound change to the authoritative shift set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ShiftMutation {
    Create {
        shift: Shift,
    },
    #[serde(rename_all = "camelCase")]
    Update {
        id: ShiftId,
        start_time: ClockTime,
        end_time: ClockTime,
    },
    Delete {
        id: ShiftId,
    },
}

impl ShiftMutation {
    pub fn update(shift: &Shift) -> Self {
        ShiftMutation::Update {
            id: shift.id.clone(),
            start_time: shift.start_time,
            end_time: shift.end_time,
        }
    }

    pub fn shift_id(&self) -> &ShiftId {
        match self {
            ShiftMutation::Create { shift } => &shift.id,
            ShiftMutation::Update { id, .. } | ShiftMutation::Delete { id } => id,
        }
    }
}

/// Trait for undoable commands
pub trait Command: std::fmt::Debug {
    /// Apply the command (do/redo)
    fn execute(&self, schedule: &mut DaySchedule) -> Result<ShiftMutation>;

    /// Revert the command
    fn undo(&self, schedule: &mut DaySchedule) -> Result<ShiftMutation>;

    fn description(&self) -> String;
}

fn insert(schedule: &mut DaySchedule, shift: &Shift) -> Result<ShiftMutation> {
    schedule.insert(shift.clone()).map_err(|e| anyhow!(e))?;
    Ok(ShiftMutation::Create {
        shift: shift.clone(),
    })
}

fn delete(schedule: &mut DaySchedule, id: &ShiftId) -> Result<ShiftMutation> {
    schedule.remove(id).map_err(|e| anyhow!(e))?;
    Ok(ShiftMutation::Delete { id: id.clone() })
}

fn set_times(schedule: &mut DaySchedule, target: &Shift) -> Result<ShiftMutation> {
    let current = schedule
        .get(&target.id)
        .ok_or_else(|| anyhow!("Shift {} is no longer on this day", target.id))?;
    let updated = current.with_times(target.start_time, target.end_time);
    schedule.replace(updated.clone()).map_err(|e| anyhow!(e))?;
    Ok(ShiftMutation::update(&updated))
}

#[derive(Debug, Clone)]
pub struct CreateShiftCommand {
    shift: Shift,
}

impl CreateShiftCommand {
    pub fn new(shift: Shift) -> Self {
        Self { shift }
    }
}

impl Command for CreateShiftCommand {
    fn execute(&self, schedule: &mut DaySchedule) -> Result<ShiftMutation> {
        insert(schedule, &self.shift)
    }

    fn undo(&self, schedule: &mut DaySchedule) -> Result<ShiftMutation> {
        delete(schedule, &self.shift.id)
    }

    fn description(&self) -> String {
        format!("Create shift \"{}\"", self.shift.title)
    }
}

/// Move or resize; only the bounds are replayed.
#[derive(Debug, Clone)]
pub struct UpdateShiftCommand {
    pub old_shift: Shift,
    pub new_shift: Shift,
}

impl UpdateShiftCommand {
    pub fn new(old_shift: Shift, new_shift: Shift) -> Self {
        Self {
            old_shift,
            new_shift,
        }
    }
}

impl Command for UpdateShiftCommand {
    fn execute(&self, schedule: &mut DaySchedule) -> Result<ShiftMutation> {
        set_times(schedule, &self.new_shift)
    }

    fn undo(&self, schedule: &mut DaySchedule) -> Result<ShiftMutation> {
        set_times(schedule, &self.old_shift)
    }

    fn description(&self) -> String {
        format!(
            "Move shift \"{}\" to {}-{}",
            self.new_shift.title, self.new_shift.start_time, self.new_shift.end_time
        )
    }
}

#[derive(Debug, Clone)]
pub struct DeleteShiftCommand {
    shift: Shift,
}

impl DeleteShiftCommand {
    pub fn new(shift: Shift) -> Self {
        Self { shift }
    }
}

impl Command for DeleteShiftCommand {
    fn execute(&self, schedule: &mut DaySchedule) -> Result<ShiftMutation> {
        delete(schedule, &self.shift.id)
    }

    fn undo(&self, schedule: &mut DaySchedule) -> Result<ShiftMutation> {
        insert(schedule, &self.shift)
    }

    fn description(&self) -> String {
        format!("Delete shift \"{}\"", self.shift.title)
    }
}

/// Manager for undo/redo stacks
#[derive(Debug)]
pub struct UndoManager {
    undo_stack: Vec<Box<dyn Command + Send + Sync>>,
    redo_stack: Vec<Box<dyn Command + Send + Sync>>,
    max_history: usize,
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoManager {
    pub fn new() -> Self {
        Self::with_capacity(50)
    }

    pub fn with_capacity(max_history: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_history,
        }
    }

    /// Push a command that has already been applied
    pub fn push(&mut self, command: Box<dyn Command + Send + Sync>) {
        self.redo_stack.clear();
        self.undo_stack.push(command);

        while self.undo_stack.len() > self.max_history {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last command; `Ok(None)` when there is nothing to undo.
    ///
    /// A command that no longer applies is dropped from history.
    pub fn undo(&mut self, schedule: &mut DaySchedule) -> Result<Option<ShiftMutation>> {
        let Some(command) = self.undo_stack.pop() else {
            return Ok(None);
        };
        let mutation = command.undo(schedule)?;
        self.redo_stack.push(command);
        Ok(Some(mutation))
    }

    pub fn redo(&mut self, schedule: &mut DaySchedule) -> Result<Option<ShiftMutation>> {
        let Some(command) = self.redo_stack.pop() else {
            return Ok(None);
        };
        let mutation = command.execute(schedule)?;
        self.undo_stack.push(command);
        Ok(Some(mutation))
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(|cmd| cmd.description())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|cmd| cmd.description())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
