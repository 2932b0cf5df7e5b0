use anyhow::{bail, Result};
use std::str::FromStr;

/// A line typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Connect to the given address, or to the address input when omitted
    Connect(Option<String>),
    /// Replace the address input without connecting
    Address(String),
    Toggle,
    Status,
    Show,
    Help,
    Quit,
}

impl UserCommand {
    pub const HELP: &'static str = "\
commands:
  connect [address]  probe the device (defaults to the address input)
  address <address>  set the address input
  toggle             toggle the LED
  status             refresh the LED state
  show               print the current view
  help               print this help
  quit               exit";
}

impl FromStr for UserCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, argument) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim())),
            None => (line, None),
        };

        let name = name.to_ascii_lowercase();
        let command = match (name.as_str(), argument) {
            ("connect", argument) => Self::Connect(argument.map(str::to_string)),
            ("address", Some(address)) => Self::Address(address.to_string()),
            ("address", None) => bail!("failed to parse command: address requires a value"),
            ("toggle", None) => Self::Toggle,
            ("status" | "refresh", None) => Self::Status,
            ("show" | "", None) => Self::Show,
            ("help" | "?", None) => Self::Help,
            ("quit" | "exit", None) => Self::Quit,
            (name, Some(_))
                if ["toggle", "status", "refresh", "show", "help", "quit", "exit"]
                    .contains(&name) =>
            {
                bail!("failed to parse command: {name} takes no argument")
            }
            _ => bail!("failed to parse command: unknown command {name:?}, try help"),
        };

        Ok(command)
    }
}
