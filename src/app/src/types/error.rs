use std::fmt;

/// Failure of a widget operation as shown to the user.
///
/// Every variant ends up as plain text in the status indicator; the
/// distinction only matters for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// Connect was requested with an empty or whitespace-only address.
    EmptyAddress,
    /// The device answered with a non-2xx status code.
    Http { status: u16 },
    /// The request never produced a response (DNS, refused, invalid URL, ...).
    Transport(String),
    /// The response body was missing, not JSON, or had the wrong shape.
    MalformedResponse(String),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::EmptyAddress => write!(f, "Please enter an IP address"),
            ControlError::Http { status } => write!(f, "HTTP error {status}"),
            ControlError::Transport(message) => write!(f, "{message}"),
            ControlError::MalformedResponse(detail) => write!(f, "malformed response: {detail}"),
        }
    }
}

impl std::error::Error for ControlError {}
