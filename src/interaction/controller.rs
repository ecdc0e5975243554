//! Drag, resize and click-to-create session state machine.
//!
//! One gesture at a time. Each pointer frame proposes a candidate that is
//! either committed in full or discarded in full; releasing the pointer ends
//! the session whatever the last frame did, leaving the shift at its last
//! committed bounds.

use crate::models::settings::GridConfig;
use crate::models::shift::{ClockTime, Shift, ShiftId, TimeRange};
use crate::services::grid::GridGeometry;
use crate::services::layout::{layout_day, ShiftLayout};
use crate::services::validation::validate_move;

use super::commands::{
    CreateShiftCommand, DeleteShiftCommand, ShiftMutation, UndoManager, UpdateShiftCommand,
};
use super::drag::DragContext;
use super::resize::{hit_test, ResizeContext};
use super::schedule::DaySchedule;
use super::{GridEvent, PointerTarget};

pub const NEW_SHIFT_TITLE: &str = "New shift";

/// The active gesture, with its data inside the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Dragging(DragContext),
    Resizing(ResizeContext),
    /// Click-to-create waiting for confirm or cancel
    Previewing(Shift),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Dragging(_) => "dragging",
            SessionState::Resizing(_) => "resizing",
            SessionState::Previewing(_) => "previewing",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }
}

pub struct InteractionController {
    config: GridConfig,
    grid: GridGeometry,
    schedule: DaySchedule,
    state: SessionState,
    history: UndoManager,
    next_draft: u64,
}

impl InteractionController {
    pub fn new(config: GridConfig, schedule: DaySchedule) -> Self {
        Self {
            grid: GridGeometry::from_config(&config),
            config,
            schedule,
            state: SessionState::Idle,
            history: UndoManager::new(),
            next_draft: 1,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn schedule(&self) -> &DaySchedule {
        &self.schedule
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn history(&self) -> &UndoManager {
        &self.history
    }

    /// Replace the working set with another day's shifts, ending any session.
    pub fn load_day(&mut self, schedule: DaySchedule) {
        if !self.state.is_idle() {
            log::debug!("Discarding {} session on day change", self.state.name());
        }
        self.schedule = schedule;
        self.state = SessionState::Idle;
        self.history.clear();
    }

    /// Render annotations for the current shift set.
    pub fn layout(&self) -> Vec<ShiftLayout> {
        layout_day(self.schedule.shifts(), &self.config)
    }

    pub fn hit_test(&self, x_fraction: f32, y: f32) -> PointerTarget {
        hit_test(&self.layout(), x_fraction, y, self.config.resize_handle_height)
    }

    /// Feed events in order, collecting every emitted mutation.
    pub fn handle_all<I>(&mut self, events: I) -> Vec<ShiftMutation>
    where
        I: IntoIterator<Item = GridEvent>,
    {
        events
            .into_iter()
            .filter_map(|event| self.handle(event))
            .collect()
    }

    /// Advance the state machine by one event.
    pub fn handle(&mut self, event: GridEvent) -> Option<ShiftMutation> {
        let state = std::mem::replace(&mut self.state, SessionState::Idle);

        let (next, mutation) = match (state, event) {
            (SessionState::Idle, GridEvent::PointerDown { y, target }) => (self.begin(target, y), None),

            (SessionState::Dragging(ctx), GridEvent::PointerMove { y }) => self.drag_to(ctx, y),
            (SessionState::Resizing(ctx), GridEvent::PointerMove { y }) => self.resize_to(ctx, y),

            (SessionState::Dragging(ctx), GridEvent::PointerUp { .. }) => {
                if ctx.has_moved() {
                    self.record_update(ctx.original, ctx.shift);
                }
                (SessionState::Idle, None)
            }
            (SessionState::Resizing(ctx), GridEvent::PointerUp { .. }) => {
                if ctx.has_resized() {
                    self.record_update(ctx.original, ctx.shift);
                }
                (SessionState::Idle, None)
            }

            (SessionState::Previewing(proposed), GridEvent::Confirm) => {
                (SessionState::Idle, self.confirm(proposed))
            }
            (SessionState::Previewing(proposed), GridEvent::Cancel) => {
                log::debug!("Preview {}-{} cancelled", proposed.start_time, proposed.end_time);
                (SessionState::Idle, None)
            }

            (SessionState::Idle, GridEvent::Delete { id }) => (SessionState::Idle, self.delete(&id)),
            (SessionState::Idle, GridEvent::Undo) => (SessionState::Idle, self.undo()),
            (SessionState::Idle, GridEvent::Redo) => (SessionState::Idle, self.redo()),

            (state, event) => {
                log::debug!("Ignoring {:?} while {}", event, state.name());
                (state, None)
            }
        };

        log::trace!("Session now {}", next.name());
        self.state = next;
        mutation
    }

    fn begin(&mut self, target: PointerTarget, y: f32) -> SessionState {
        match target {
            PointerTarget::ShiftBody(id) => match self.schedule.get(&id) {
                Some(shift) => SessionState::Dragging(DragContext::from_shift(
                    shift,
                    y,
                    &self.grid,
                    self.config.day_start_minutes(),
                )),
                None => {
                    log::debug!("Pointer down on unknown shift {}", id);
                    SessionState::Idle
                }
            },
            PointerTarget::ResizeHandle(id) => match self.schedule.get(&id) {
                Some(shift) => SessionState::Resizing(ResizeContext::from_shift(shift, y)),
                None => {
                    log::debug!("Resize handle of unknown shift {}", id);
                    SessionState::Idle
                }
            },
            PointerTarget::EmptyGrid => match self.preview_at(y) {
                Ok(proposed) => SessionState::Previewing(proposed),
                Err(err) => {
                    log::warn!("Cannot preview a shift at y={}: {}", y, err);
                    SessionState::Idle
                }
            },
        }
    }

    /// Default-length shift at the snapped click position, kept inside the day window.
    fn preview_at(&mut self, y: f32) -> Result<Shift, String> {
        let day_start = self.config.day_start_minutes();
        let day_end = self.config.day_end_minutes();
        let length = self.config.default_shift_minutes as i32;

        let clicked = day_start + self.grid.pixels_to_minutes(self.grid.snap_to_grid(y));
        let start = clicked.min(day_end - length).max(day_start);
        let end = start + length;

        let shift = Shift::builder()
            .id(ShiftId::draft(self.next_draft))
            .date(self.schedule.date())
            .start(ClockTime::from_minutes(start as i64).map_err(|e| e.to_string())?)
            .end(ClockTime::from_minutes(end as i64).map_err(|e| e.to_string())?)
            .title(NEW_SHIFT_TITLE)
            .build()?;
        self.next_draft += 1;
        Ok(shift)
    }

    fn drag_to(&mut self, mut ctx: DragContext, y: f32) -> (SessionState, Option<ShiftMutation>) {
        let candidate = ctx.candidate(y, &self.grid, self.config.day_start_minutes());
        let mutation = self.commit(&ctx.shift, candidate).map(|updated| {
            let mutation = ShiftMutation::update(&updated);
            ctx.shift = updated;
            mutation
        });
        (SessionState::Dragging(ctx), mutation)
    }

    fn resize_to(&mut self, mut ctx: ResizeContext, y: f32) -> (SessionState, Option<ShiftMutation>) {
        let candidate = ctx.candidate(y, &self.grid);
        let mutation = self.commit(&ctx.shift, candidate).map(|updated| {
            let mutation = ShiftMutation::update(&updated);
            ctx.advance(updated, &self.grid);
            mutation
        });
        (SessionState::Resizing(ctx), mutation)
    }

    /// Validate `candidate` against the current set and swap it in when accepted.
    fn commit(&mut self, shift: &Shift, candidate: TimeRange) -> Option<Shift> {
        if candidate == shift.range() {
            return None;
        }

        let validation = validate_move(
            shift,
            candidate.start,
            candidate.end,
            self.schedule.shifts(),
            self.config.allow_overlap,
            &self.config,
        );
        if let Some(reason) = validation.reason {
            log::debug!(
                "Rejected {} -> [{}, {}): {}",
                shift.id,
                candidate.start,
                candidate.end,
                reason
            );
            return None;
        }

        let start = ClockTime::from_minutes(candidate.start as i64).ok()?;
        let end = ClockTime::from_minutes(candidate.end as i64).ok()?;
        let updated = shift.with_times(start, end);
        if let Err(err) = self.schedule.replace(updated.clone()) {
            log::error!("Failed to commit shift {}: {}", shift.id, err);
            return None;
        }
        log::debug!("Committed {} at {}-{}", updated.id, start, end);
        Some(updated)
    }

    fn record_update(&mut self, original: Shift, updated: Shift) {
        log::info!(
            "Shift {} changed from {}-{} to {}-{}",
            updated.id,
            original.start_time,
            original.end_time,
            updated.start_time,
            updated.end_time
        );
        self.history
            .push(Box::new(UpdateShiftCommand::new(original, updated)));
    }

    fn confirm(&mut self, proposed: Shift) -> Option<ShiftMutation> {
        let range = proposed.range();
        let validation = validate_move(
            &proposed,
            range.start,
            range.end,
            self.schedule.shifts(),
            self.config.allow_overlap,
            &self.config,
        );
        if let Some(reason) = validation.reason {
            log::warn!(
                "New shift {}-{} rejected: {}",
                proposed.start_time,
                proposed.end_time,
                reason
            );
            return None;
        }

        if let Err(err) = self.schedule.insert(proposed.clone()) {
            log::error!("Failed to add shift {}: {}", proposed.id, err);
            return None;
        }
        log::info!(
            "Created shift {} at {}-{}",
            proposed.id,
            proposed.start_time,
            proposed.end_time
        );
        self.history
            .push(Box::new(CreateShiftCommand::new(proposed.clone())));
        Some(ShiftMutation::Create { shift: proposed })
    }

    fn delete(&mut self, id: &ShiftId) -> Option<ShiftMutation> {
        match self.schedule.remove(id) {
            Ok(removed) => {
                log::info!("Deleted shift {}", id);
                self.history.push(Box::new(DeleteShiftCommand::new(removed)));
                Some(ShiftMutation::Delete { id: id.clone() })
            }
            Err(err) => {
                log::warn!("Cannot delete: {}", err);
                None
            }
        }
    }

    fn undo(&mut self) -> Option<ShiftMutation> {
        match self.history.undo(&mut self.schedule) {
            Ok(mutation) => mutation,
            Err(err) => {
                log::warn!("Undo failed: {:#}", err);
                None
            }
        }
    }

    fn redo(&mut self) -> Option<ShiftMutation> {
        match self.history.redo(&mut self.schedule) {
            Ok(mutation) => mutation,
            Err(err) => {
                log::warn!("Redo failed: {:#}", err);
                None
            }
        }
    }
}
