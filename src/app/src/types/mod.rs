//! Domain-based type organization
//!
//! - connection: status line shown for the device connection
//! - error: failures surfaced to the user
//! - led: LED API bodies and the rendered LED indicator

pub mod connection;
pub mod error;
pub mod led;

pub use connection::*;
pub use error::*;
pub use led::*;
