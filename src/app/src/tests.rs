use super::*;
use crux_core::{App as _, Core};
use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};

fn split_effects(
    mut command: Command<Effect, Event>,
) -> (Vec<HttpRequest>, Vec<TimerOperation>, usize) {
    let mut http = Vec::new();
    let mut timers = Vec::new();
    let mut renders = 0;

    for effect in command.effects() {
        match effect {
            Effect::Http(request) => http.push(request.operation.clone()),
            Effect::Timer(request) => timers.push(request.operation.clone()),
            Effect::Render(_) => renders += 1,
            Effect::Storage(_) => {}
        }
    }

    (http, timers, renders)
}

fn connected_model(address: &str) -> Model {
    let mut model = Model {
        address_input: address.to_string(),
        device_address: Some(address.to_string()),
        ..Default::default()
    };
    model.set_connected();
    model
}

#[test]
fn test_connect_probes_device_status() {
    let app = App;
    let mut model = Model::default();

    let command = app.update(
        Event::Connect {
            address: "192.168.1.50".to_string(),
        },
        &mut model,
    );
    let (http, timers, renders) = split_effects(command);

    assert_eq!(http.len(), 1);
    assert_eq!(http[0].method, "GET");
    assert_eq!(http[0].url, "http://192.168.1.50/api/status");
    assert!(timers.is_empty());
    assert_eq!(renders, 1);
    assert!(!model.is_connected);
}

#[test]
fn test_successful_probe_connects_and_fetches_led_status_once() {
    let app = App;
    let mut model = Model {
        device_address: Some("192.168.1.50".to_string()),
        ..Default::default()
    };

    let command = app.update(Event::StatusResponse(Ok(())), &mut model);
    let (http, _, _) = split_effects(command);

    assert!(model.is_connected);
    assert!(model.control_panel_visible);
    assert_eq!(model.status.text, "Connected");
    assert_eq!(model.status.class, StatusClass::Connected);
    assert_eq!(http.len(), 1);
    assert_eq!(http[0].method, "GET");
    assert_eq!(http[0].url, "http://192.168.1.50/api/led-status");
}

#[test]
fn test_blank_address_never_reaches_network() {
    let app = App;

    for address in ["", "   ", "\t\n"] {
        let mut model = Model::default();
        let command = app.update(
            Event::Connect {
                address: address.to_string(),
            },
            &mut model,
        );
        let (http, timers, _) = split_effects(command);

        assert!(http.is_empty());
        assert_eq!(model.status.text, "Please enter an IP address");
        assert_eq!(model.status.class, StatusClass::Error);
        assert_eq!(model.device_address, None);
        assert_eq!(
            timers,
            vec![TimerOperation::Start {
                id: 1,
                millis: 3000
            }]
        );
    }
}

#[test]
fn test_failed_probe_reverts_to_disconnected_after_timeout() {
    let app = App;
    let mut model = Model {
        device_address: Some("10.0.0.7".to_string()),
        ..Default::default()
    };

    let command = app.update(
        Event::StatusResponse(Err(ControlError::Transport(
            "error sending request".to_string(),
        ))),
        &mut model,
    );
    let (http, timers, _) = split_effects(command);

    assert!(http.is_empty());
    assert!(!model.control_panel_visible);
    assert!(model.status.text.contains("error sending request"));

    let [TimerOperation::Start { id, millis }] = timers.as_slice() else {
        panic!("expected exactly one timer start, got {timers:?}");
    };
    assert_eq!(*millis, ERROR_REVERT_MILLIS);

    let _command = app.update(
        Event::ErrorRevertTimer(TimerOutput::Elapsed { id: *id }),
        &mut model,
    );

    assert_eq!(model.status.text, "Disconnected");
    assert_eq!(model.status.class, StatusClass::Error);
}

#[test]
fn test_disconnected_widget_ignores_led_requests() {
    let app = App;
    let mut model = Model {
        device_address: Some("192.168.1.50".to_string()),
        ..Default::default()
    };

    for event in [Event::ToggleLed, Event::FetchLedStatus] {
        let command = app.update(event, &mut model);
        let (http, timers, renders) = split_effects(command);
        assert!(http.is_empty());
        assert!(timers.is_empty());
        assert_eq!(renders, 0);
    }
}

#[test]
fn test_toggle_posts_with_json_content_type_and_empty_body() {
    let app = App;
    let mut model = connected_model("192.168.1.50");

    let command = app.update(Event::ToggleLed, &mut model);
    let (http, _, _) = split_effects(command);

    assert_eq!(http.len(), 1);
    let request = &http[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "http://192.168.1.50/api/toggle-led");
    assert!(request.body.is_empty());
    assert!(request
        .headers
        .iter()
        .any(|header| header.name.eq_ignore_ascii_case("content-type")
            && header.value == "application/json"));
}

#[test]
fn test_toggle_off_renders_success_styled_on_button() {
    let app = App;
    let mut model = connected_model("192.168.1.50");

    let response: ToggleLedResponse =
        serde_json::from_str(r#"{"ledState":false,"message":"LED turned off"}"#).unwrap();
    let _command = app.update(Event::ToggleLedResponse(Ok(response.clone())), &mut model);
    let first = model.clone();
    let _command = app.update(Event::ToggleLedResponse(Ok(response)), &mut model);

    let led = model.led.clone().expect("LED indicator rendered");
    assert_eq!(led.text, "OFF");
    assert_eq!(led.class, "off");
    assert_eq!(led.button_label, "Turn LED ON");
    assert_eq!(led.button_class, "btn success");
    assert_eq!(model, first);
}

#[test]
fn test_newer_error_replaces_pending_revert_timer() {
    let app = App;
    let mut model = connected_model("192.168.1.50");

    let command = app.update(
        Event::LedStatusResponse(Err(ControlError::Http { status: 500 })),
        &mut model,
    );
    let (_, first_timers, _) = split_effects(command);
    assert_eq!(
        first_timers,
        vec![TimerOperation::Start {
            id: 1,
            millis: 3000
        }]
    );

    let command = app.update(
        Event::ToggleLedResponse(Err(ControlError::Http { status: 500 })),
        &mut model,
    );
    let (_, second_timers, _) = split_effects(command);
    assert_eq!(second_timers.len(), 2);
    assert!(second_timers.contains(&TimerOperation::Cancel { id: 1 }));
    assert!(second_timers.contains(&TimerOperation::Start {
        id: 2,
        millis: 3000
    }));

    // the cancelled timer may still fire in a racing shell
    let _command = app.update(
        Event::ErrorRevertTimer(TimerOutput::Elapsed { id: 1 }),
        &mut model,
    );
    assert_eq!(model.status.text, "Failed to toggle LED");

    // the revert uses the connection state at fire time
    model.set_disconnected();
    model.status = StatusIndicator::error("Failed to toggle LED");
    let _command = app.update(
        Event::ErrorRevertTimer(TimerOutput::Elapsed { id: 2 }),
        &mut model,
    );
    assert_eq!(model.status.text, "Disconnected");
    assert!(!model.error_timer_pending);
}

#[test]
fn test_address_changed_updates_input() {
    let app = App;
    let mut model = Model::default();

    let _command = app.update(
        Event::AddressChanged {
            address: "esp32.local".to_string(),
        },
        &mut model,
    );

    assert_eq!(model.address_input, "esp32.local");
}

fn http_response(status: u16, body: &str) -> HttpResult {
    HttpResult::Ok(HttpResponse {
        status,
        headers: vec![],
        body: body.as_bytes().to_vec(),
    })
}

/// Resolve the single HTTP request among `effects`, returning the follow-up effects
fn resolve_http(core: &Core<App>, effects: Vec<Effect>, result: HttpResult) -> Vec<Effect> {
    let mut requests: Vec<_> = effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .collect();
    assert_eq!(requests.len(), 1, "expected exactly one HTTP request");

    core.resolve(&mut requests[0], result)
        .expect("failed to resolve HTTP request")
}

#[test]
fn test_probe_server_error_shows_status_code_only() {
    let core: Core<App> = Core::new();

    let effects = core.process_event(Event::Connect {
        address: "192.168.1.50".to_string(),
    });
    let _effects = resolve_http(&core, effects, http_response(503, "busy"));

    let view = core.view();
    assert!(!view.is_connected);
    assert!(!view.control_panel_visible);
    assert_eq!(view.status.text, "Connection failed: HTTP error 503");
}

#[test]
fn test_led_status_server_error_keeps_connection() {
    let core: Core<App> = Core::new();

    let effects = core.process_event(Event::Connect {
        address: "192.168.1.50".to_string(),
    });
    let effects = resolve_http(&core, effects, http_response(200, "{}"));
    let _effects = resolve_http(&core, effects, http_response(500, ""));

    let view = core.view();
    assert!(view.is_connected);
    assert!(view.control_panel_visible);
    assert_eq!(view.status.text, "Failed to get LED status");
    assert_eq!(view.led, None);
}
