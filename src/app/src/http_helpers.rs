//! HTTP helper functions for Crux Core
//!
//! Response handling shared by all device requests. The classification
//! into [`ControlError`] lives in plain functions over status code and body
//! so it can be unit tested without a `crux_http::Response`.

use crux_http::{HttpError, Response};
use serde::de::DeserializeOwned;

use crate::types::ControlError;

/// Connectivity probe; any JSON body counts as success.
pub const STATUS_ENDPOINT: &str = "/api/status";
pub const LED_STATUS_ENDPOINT: &str = "/api/led-status";
pub const TOGGLE_LED_ENDPOINT: &str = "/api/toggle-led";

/// Constructs the device URL for an endpoint.
///
/// The address is used exactly as entered: no scheme override, any port
/// has to be typed by the user.
///
/// # Example
/// ```
/// use esp_led_remote_core::http_helpers::build_url;
/// let url = build_url("192.168.1.50", "/api/status");
/// assert_eq!(url, "http://192.168.1.50/api/status");
/// ```
pub fn build_url(address: &str, endpoint: &str) -> String {
    format!("http://{address}{endpoint}")
}

/// Checks that the address forms a valid device URL.
///
/// Only rejects what no HTTP client could send (spaces, stray brackets, ...);
/// host names and ports are not inspected.
pub fn validate_device_url(address: &str) -> Result<(), ControlError> {
    url::Url::parse(&build_url(address, STATUS_ENDPOINT))
        .map(|_| ())
        .map_err(|e| ControlError::Transport(format!("invalid device URL: {e}")))
}

/// Decode a JSON body after checking the status code.
pub fn decode_json_body<T: DeserializeOwned>(
    status: u16,
    body: Option<Vec<u8>>,
) -> Result<T, ControlError> {
    if !(200..300).contains(&status) {
        return Err(ControlError::Http { status });
    }

    match body {
        Some(body) => serde_json::from_slice(&body)
            .map_err(|e| ControlError::MalformedResponse(format!("JSON parse error: {e}"))),
        None => Err(ControlError::MalformedResponse(
            "empty response body".to_string(),
        )),
    }
}

/// Parse JSON from response body.
///
/// Returns error if response is not successful or JSON parsing fails.
pub fn parse_json_response<T: DeserializeOwned>(
    response: &mut Response<Vec<u8>>,
) -> Result<T, ControlError> {
    let status = u16::from(response.status());
    decode_json_body(status, response.take_body())
}

/// Process HTTP response result and parse JSON
///
/// `crux_http` reports a non-2xx status as `HttpError::Http`, which becomes
/// `ControlError::Http` carrying only the status code.
pub fn process_json_response<T: DeserializeOwned>(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, ControlError> {
    match result {
        Ok(mut response) => parse_json_response(&mut response),
        Err(HttpError::Http { code, .. }) => Err(ControlError::Http {
            status: u16::from(code),
        }),
        Err(e) => Err(ControlError::Transport(e.to_string())),
    }
}

/// Process the status probe response: 2xx with any parseable JSON body
pub fn process_status_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), ControlError> {
    process_json_response::<serde_json::Value>(result).map(|data| {
        log::info!("Connection successful: {data}");
    })
}
