use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete widget session state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// Contents of the address input field
    pub address_input: String,
    /// Address the current session talks to (trimmed, non-empty)
    pub device_address: Option<String>,

    // Connection state
    pub is_connected: bool,
    pub control_panel_visible: bool,
    pub status: StatusIndicator,

    // LED state, only ever taken from the latest device response
    pub led: Option<LedIndicator>,
    pub last_message: Option<String>,

    /// Id of the most recently scheduled error-revert timer
    pub error_timer_id: u32,
    pub error_timer_pending: bool,
}

impl Model {
    /// Base URL of the device, available once an address was accepted
    pub fn device_address(&self) -> Option<&str> {
        self.device_address.as_deref()
    }

    pub fn set_connected(&mut self) {
        self.is_connected = true;
        self.control_panel_visible = true;
        self.status = StatusIndicator::connected();
    }

    pub fn set_disconnected(&mut self) {
        self.is_connected = false;
        self.control_panel_visible = false;
        self.status = StatusIndicator::disconnected();
    }

    pub fn render_led_state(&mut self, is_on: bool) {
        self.led = Some(LedIndicator::from_state(is_on));
    }

    /// Restore the status line implied by the current connection flag
    pub fn revert_status(&mut self) {
        self.status = StatusIndicator::standing(self.is_connected);
    }
}
