//! Direct manipulation of shifts on the day grid.
//!
//! Pointer input arrives as [`GridEvent`]s in order and is consumed by the
//! [`InteractionController`] state machine, which validates every frame and
//! emits [`ShiftMutation`]s for the host to persist.

pub mod commands;
pub mod controller;
pub mod drag;
pub mod driver;
pub mod resize;
pub mod schedule;

use serde::{Deserialize, Serialize};

use crate::models::shift::ShiftId;

pub use commands::{ShiftMutation, UndoManager};
pub use controller::{InteractionController, SessionState};
pub use drag::DragContext;
pub use driver::{run_event_loop, MutationSink};
pub use resize::{hit_test, ResizeContext};
pub use schedule::DaySchedule;

/// What a pointer-down landed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum PointerTarget {
    ShiftBody(ShiftId),
    /// Bottom-edge resize handle of a shift
    ResizeHandle(ShiftId),
    EmptyGrid,
}

/// Host-agnostic input to the controller. `y` is pixels from the top of the day window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GridEvent {
    PointerDown { y: f32, target: PointerTarget },
    PointerMove { y: f32 },
    PointerUp { y: f32 },
    /// Accept the pending click-to-create preview
    Confirm,
    /// Drop the pending click-to-create preview
    Cancel,
    Delete { id: ShiftId },
    Undo,
    Redo,
}
