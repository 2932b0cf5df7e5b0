/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.address_input, address)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.is_connected, true;
///     model.control_panel_visible, true
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for GET requests against the device API.
///
/// The response is turned into `Result<_, ControlError>` and wrapped in the
/// named response event.
///
/// # Patterns
///
/// Pattern 1: GET expecting a typed JSON body
/// ```ignore
/// device_get!(address, LED_STATUS_ENDPOINT, LedStatusResponse, expect_json: LedStatus)
/// ```
///
/// Pattern 2: GET with a custom response processor
/// ```ignore
/// device_get!(address, STATUS_ENDPOINT, StatusResponse, process: process_status_response)
/// ```
#[macro_export]
macro_rules! device_get {
    // Pattern 1: GET expecting JSON response
    ($address:expr, $endpoint:expr, $response_event:ident, expect_json: $response_type:ty) => {{
        $crate::HttpCmd::get($crate::build_url($address, $endpoint))
            .build()
            .then_send(|result| {
                let event_result: Result<$response_type, $crate::ControlError> =
                    $crate::process_json_response(result);
                $crate::events::Event::$response_event(event_result)
            })
    }};

    // Pattern 2: GET with custom processing
    ($address:expr, $endpoint:expr, $response_event:ident, process: $processor:path) => {{
        $crate::HttpCmd::get($crate::build_url($address, $endpoint))
            .build()
            .then_send(|result| $crate::events::Event::$response_event($processor(result)))
    }};
}

/// Macro for POST requests against the device API.
///
/// The device expects a JSON content type even though no payload is sent.
///
/// ```ignore
/// device_post!(address, TOGGLE_LED_ENDPOINT, ToggleLedResponse, expect_json: ToggleLedResponse)
/// ```
#[macro_export]
macro_rules! device_post {
    ($address:expr, $endpoint:expr, $response_event:ident, expect_json: $response_type:ty) => {{
        $crate::HttpCmd::post($crate::build_url($address, $endpoint))
            .header("Content-Type", "application/json")
            .build()
            .then_send(|result| {
                let event_result: Result<$response_type, $crate::ControlError> =
                    $crate::process_json_response(result);
                $crate::events::Event::$response_event(event_result)
            })
    }};
}
