use crux_core::{render::render, Command};

use crate::commands::timer::TimerOutput;
use crate::events::Event;
use crate::model::Model;
use crate::types::StatusIndicator;
use crate::{Effect, TimerCmd};

/// Delay before a transient error gives way to the standing status line
pub const ERROR_REVERT_MILLIS: u64 = 3000;

/// Show a transient error in the status line.
///
/// Only one revert timer is live at a time: a newer error cancels the
/// pending one and takes over its slot. The revert reads the connection
/// flag when it fires, not when it was scheduled.
pub fn show_error(model: &mut Model, message: impl Into<String>) -> Command<Effect, Event> {
    model.status = StatusIndicator::error(message);

    let previous = model.error_timer_pending.then_some(model.error_timer_id);
    model.error_timer_id = model.error_timer_id.wrapping_add(1);
    model.error_timer_pending = true;

    let cancel = previous.map(|id| {
        TimerCmd::cancel(id)
            .build()
            .then_send(Event::ErrorRevertTimer)
    });
    let start = TimerCmd::start(model.error_timer_id, ERROR_REVERT_MILLIS)
        .build()
        .then_send(Event::ErrorRevertTimer);

    Command::all(cancel.into_iter().chain([render(), start]))
}

/// Handle error display timer events
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::ErrorRevertTimer(TimerOutput::Elapsed { id }) => {
            // stale timer, a newer error owns the status line
            if !model.error_timer_pending || id != model.error_timer_id {
                return Command::done();
            }
            model.error_timer_pending = false;
            model.revert_status();
            render()
        }
        Event::ErrorRevertTimer(TimerOutput::Cancelled { .. }) => Command::done(),
        _ => unreachable!("Non-UI event passed to UI handler"),
    }
}
