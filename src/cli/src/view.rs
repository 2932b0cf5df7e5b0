use esp_led_remote_core::Model;

/// Render the view model as terminal text
pub fn render_view(model: &Model) -> String {
    let address = if model.address_input.is_empty() {
        "(none)"
    } else {
        model.address_input.as_str()
    };

    let mut lines = vec![format!("address: {address}")];

    let status = if model.status.text.is_empty() {
        "Not connected"
    } else {
        model.status.text.as_str()
    };
    match model.status.class.css_class() {
        "" => lines.push(format!("status:  {status}")),
        class => lines.push(format!("status:  {status} [{class}]")),
    }

    if model.control_panel_visible {
        match &model.led {
            Some(led) => {
                lines.push(format!("led:     {} [{}]", led.text, led.class));
                lines.push(format!("button:  {} [{}]", led.button_label, led.button_class));
            }
            None => lines.push("led:     unknown".to_string()),
        }
        if let Some(message) = &model.last_message {
            lines.push(format!("device:  {message}"));
        }
    }

    lines.join("\n")
}
