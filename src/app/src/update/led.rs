use crux_core::{render::render, Command};

use crate::device_get;
use crate::device_post;
use crate::events::Event;
use crate::http_helpers::{LED_STATUS_ENDPOINT, TOGGLE_LED_ENDPOINT};
use crate::model::Model;
use crate::types::{LedStatus, ToggleLedResponse};
use crate::Effect;

use super::ui::show_error;

/// Request the current LED state; does nothing while disconnected.
pub fn fetch_led_status(model: &Model) -> Command<Effect, Event> {
    match (model.is_connected, model.device_address()) {
        (true, Some(address)) => device_get!(
            address,
            LED_STATUS_ENDPOINT,
            LedStatusResponse,
            expect_json: LedStatus
        ),
        _ => Command::done(),
    }
}

/// Handle LED status and toggle events
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::FetchLedStatus => fetch_led_status(model),

        Event::LedStatusResponse(Ok(status)) => {
            model.render_led_state(status.led_state);
            render()
        }

        Event::LedStatusResponse(Err(e)) => {
            log::error!("Failed to get LED status: {e}");
            show_error(model, "Failed to get LED status")
        }

        Event::ToggleLed => match (model.is_connected, model.device_address()) {
            (true, Some(address)) => device_post!(
                address,
                TOGGLE_LED_ENDPOINT,
                ToggleLedResponse,
                expect_json: ToggleLedResponse
            ),
            _ => Command::done(),
        },

        Event::ToggleLedResponse(Ok(response)) => {
            model.render_led_state(response.led_state);
            log::info!("{}", response.message);
            model.last_message = Some(response.message);
            render()
        }

        Event::ToggleLedResponse(Err(e)) => {
            log::error!("Failed to toggle LED: {e}");
            show_error(model, "Failed to toggle LED")
        }

        _ => unreachable!("Non-LED event passed to LED handler"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ControlError;
    use crate::update::update;

    fn connected_model() -> Model {
        let mut model = Model {
            device_address: Some("192.168.1.50".to_string()),
            ..Default::default()
        };
        model.set_connected();
        model
    }

    #[test]
    fn led_status_failure_keeps_connection() {
        let mut model = connected_model();
        let _command = update(
            Event::LedStatusResponse(Err(ControlError::Transport(
                "connection reset".to_string(),
            ))),
            &mut model,
        );

        assert!(model.is_connected);
        assert!(model.control_panel_visible);
        assert_eq!(model.status.text, "Failed to get LED status");
    }

    #[test]
    fn toggle_response_records_device_message() {
        let mut model = connected_model();
        let _command = update(
            Event::ToggleLedResponse(Ok(ToggleLedResponse {
                led_state: true,
                message: "LED turned on".to_string(),
            })),
            &mut model,
        );

        assert_eq!(model.last_message.as_deref(), Some("LED turned on"));
        let led = model.led.expect("LED indicator rendered");
        assert_eq!(led.text, "ON");
        assert_eq!(led.button_label, "Turn LED OFF");
        assert_eq!(led.button_class, "btn danger");
    }

    #[test]
    fn toggle_failure_shows_generic_message() {
        let mut model = connected_model();
        let _command = update(
            Event::ToggleLedResponse(Err(ControlError::MalformedResponse(
                "missing field `message`".to_string(),
            ))),
            &mut model,
        );

        assert!(model.is_connected);
        assert_eq!(model.status.text, "Failed to toggle LED");
        assert_eq!(model.led, None);
    }

    #[test]
    fn last_response_wins() {
        let mut model = connected_model();
        let _command = update(
            Event::ToggleLedResponse(Ok(ToggleLedResponse {
                led_state: true,
                message: "LED turned on".to_string(),
            })),
            &mut model,
        );
        let _command = update(
            Event::LedStatusResponse(Ok(LedStatus { led_state: false })),
            &mut model,
        );

        assert_eq!(model.led.map(|led| led.is_on), Some(false));
    }
}
