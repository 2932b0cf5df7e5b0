use crux_core::{render::render, Command};

use crate::commands::storage::StorageOutput;
use crate::device_get;
use crate::events::Event;
use crate::http_helpers::{process_status_response, validate_device_url, STATUS_ENDPOINT};
use crate::model::Model;
use crate::types::ControlError;
use crate::update_field;
use crate::{Effect, StorageCmd};

use super::led::fetch_led_status;
use super::ui::show_error;

/// Storage key of the last entered device address
pub const DEVICE_ADDRESS_KEY: &str = "espIpAddress";

/// Handle address persistence and the connectivity probe
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => StorageCmd::read(DEVICE_ADDRESS_KEY)
            .build()
            .then_send(Event::SavedAddressLoaded),

        Event::SavedAddressLoaded(output) => match output {
            StorageOutput::Value(Some(address)) if !address.is_empty() => {
                update_field!(model.address_input, address)
            }
            StorageOutput::Error { message } => {
                log::warn!("failed to read saved device address: {message}");
                Command::done()
            }
            _ => Command::done(),
        },

        Event::AddressChanged { address } => update_field!(model.address_input, address),

        Event::Connect { address } => connect(address, model),

        Event::AddressSaved(output) => {
            if let StorageOutput::Error { message } = output {
                log::warn!("failed to persist device address: {message}");
            }
            Command::done()
        }

        Event::StatusResponse(Ok(())) => {
            model.set_connected();
            Command::all([render(), fetch_led_status(model)])
        }

        Event::StatusResponse(Err(e)) => probe_failed(model, e),

        _ => unreachable!("Non-connection event passed to connection handler"),
    }
}

/// Validate and persist the address, then probe the device.
fn connect(address: String, model: &mut Model) -> Command<Effect, Event> {
    let trimmed = address.trim().to_string();
    model.address_input = address;

    if trimmed.is_empty() {
        return show_error(model, ControlError::EmptyAddress.to_string());
    }

    model.device_address = Some(trimmed.clone());

    let persist = StorageCmd::write(DEVICE_ADDRESS_KEY, trimmed.as_str())
        .build()
        .then_send(Event::AddressSaved);

    let probe = match validate_device_url(&trimmed) {
        Ok(()) => Command::all([
            render(),
            device_get!(&trimmed, STATUS_ENDPOINT, StatusResponse, process: process_status_response),
        ]),
        Err(e) => probe_failed(model, e),
    };

    Command::all([persist, probe])
}

fn probe_failed(model: &mut Model, e: ControlError) -> Command<Effect, Event> {
    log::error!("Connection failed: {e}");
    model.set_disconnected();
    show_error(model, format!("Connection failed: {e}"))
}
