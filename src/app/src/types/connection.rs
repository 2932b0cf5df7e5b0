use serde::{Deserialize, Serialize};

/// Visual class of the connection status line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum StatusClass {
    /// Nothing attempted yet
    #[default]
    Idle,
    Connected,
    Error,
}

impl StatusClass {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Connected => "connected",
            Self::Error => "error",
        }
    }
}

/// Connection status line (text and class)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatusIndicator {
    pub text: String,
    pub class: StatusClass,
}

impl StatusIndicator {
    pub fn connected() -> Self {
        Self {
            text: "Connected".to_string(),
            class: StatusClass::Connected,
        }
    }

    pub fn disconnected() -> Self {
        Self {
            text: "Disconnected".to_string(),
            class: StatusClass::Error,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            class: StatusClass::Error,
        }
    }

    /// Standing indicator implied by the connection flag
    pub fn standing(is_connected: bool) -> Self {
        if is_connected {
            Self::connected()
        } else {
            Self::disconnected()
        }
    }
}
