//! Event queue driver.
//!
//! Consumes [`GridEvent`]s from a channel in arrival order and forwards
//! every committed mutation to the persistence collaborator.

use anyhow::{anyhow, Result};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use super::commands::ShiftMutation;
use super::controller::InteractionController;
use super::GridEvent;

/// Receives committed mutations; persisting them is the implementor's job.
#[cfg_attr(test, mockall::automock)]
pub trait MutationSink {
    fn submit(&mut self, mutation: ShiftMutation) -> Result<()>;
}

impl MutationSink for Vec<ShiftMutation> {
    fn submit(&mut self, mutation: ShiftMutation) -> Result<()> {
        self.push(mutation);
        Ok(())
    }
}

impl MutationSink for UnboundedSender<ShiftMutation> {
    fn submit(&mut self, mutation: ShiftMutation) -> Result<()> {
        self.send(mutation)
            .map_err(|err| anyhow!("Mutation receiver closed, dropped change to {}", err.0.shift_id()))
    }
}

/// Drive `controller` until the event channel closes. Returns the number of mutations emitted.
///
/// A sink failure is logged and does not roll back the local shift set.
pub async fn run_event_loop<S>(
    controller: &mut InteractionController,
    mut events: UnboundedReceiver<GridEvent>,
    sink: &mut S,
) -> usize
where
    S: MutationSink + ?Sized,
{
    let mut emitted = 0;
    while let Some(event) = events.recv().await {
        let Some(mutation) = controller.handle(event) else {
            continue;
        };
        emitted += 1;
        let id = mutation.shift_id().clone();
        if let Err(err) = sink.submit(mutation) {
            log::error!("Failed to persist change to shift {}: {:#}", id, err);
        }
    }
    log::debug!("Grid event queue closed after {} mutation(s)", emitted);
    emitted
}
