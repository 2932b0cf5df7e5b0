mod connection;
mod led;
mod ui;

pub use connection::DEVICE_ADDRESS_KEY;
pub use ui::{show_error, ERROR_REVERT_MILLIS};

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Address handling and connectivity probe
        Event::Initialize
        | Event::SavedAddressLoaded(_)
        | Event::AddressChanged { .. }
        | Event::Connect { .. }
        | Event::AddressSaved(_)
        | Event::StatusResponse(_) => connection::handle(event, model),

        // LED control
        Event::FetchLedStatus
        | Event::LedStatusResponse(_)
        | Event::ToggleLed
        | Event::ToggleLedResponse(_) => led::handle(event, model),

        // Transient error display
        Event::ErrorRevertTimer(_) => ui::handle(event, model),
    }
}
