use serde::{Deserialize, Serialize};

/// Body of `GET /api/led-status`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LedStatus {
    pub led_state: bool,
}

/// Body of `POST /api/toggle-led`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToggleLedResponse {
    pub led_state: bool,
    pub message: String,
}

/// Rendered LED state together with the toggle button that flips it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedIndicator {
    pub is_on: bool,
    pub text: String,
    pub class: String,
    pub button_label: String,
    pub button_class: String,
}

impl LedIndicator {
    /// Build the indicator for the given LED state.
    ///
    /// A lit LED offers a danger-styled "turn off" button, a dark one a
    /// success-styled "turn on" button.
    pub fn from_state(is_on: bool) -> Self {
        if is_on {
            Self {
                is_on,
                text: "ON".to_string(),
                class: "on".to_string(),
                button_label: "Turn LED OFF".to_string(),
                button_class: "btn danger".to_string(),
            }
        } else {
            Self {
                is_on,
                text: "OFF".to_string(),
                class: "off".to_string(),
                button_label: "Turn LED ON".to_string(),
                button_class: "btn success".to_string(),
            }
        }
    }
}
