use serde::{Deserialize, Serialize};

use crate::commands::{storage::StorageOutput, timer::TimerOutput};
use crate::types::*;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Initialization (loads the saved device address)
    Initialize,

    // User input
    AddressChanged { address: String },
    Connect { address: String },
    FetchLedStatus,
    ToggleLed,

    // Device responses (internal events, skipped from serialization)
    #[serde(skip)]
    StatusResponse(Result<(), ControlError>),
    #[serde(skip)]
    LedStatusResponse(Result<LedStatus, ControlError>),
    #[serde(skip)]
    ToggleLedResponse(Result<ToggleLedResponse, ControlError>),

    // Shell responses (internal events)
    #[serde(skip)]
    SavedAddressLoaded(StorageOutput),
    #[serde(skip)]
    AddressSaved(StorageOutput),
    #[serde(skip)]
    ErrorRevertTimer(TimerOutput),
}
