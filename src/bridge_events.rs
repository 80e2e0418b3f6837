use serde_json::value::RawValue;
use tauri::{AppHandle, Emitter, Listener};

use crate::{
    append_desktop_log, window_actions, IMAGE_EVENT, IMAGE_WINDOW_LABEL, TOGGLE_IMAGE_EVENT,
    TOGGLE_SETTINGS_EVENT,
};

// The listeners target labels, not window handles, so they survive
// window recreation.
pub(crate) fn register_bridge_listeners(app_handle: &AppHandle) {
    let image_handle = app_handle.clone();
    app_handle.listen(TOGGLE_IMAGE_EVENT, move |event| {
        window_actions::show_image_window(&image_handle, append_desktop_log);
        forward_image_payload(&image_handle, event.payload(), append_desktop_log);
    });

    let settings_handle = app_handle.clone();
    app_handle.listen(TOGGLE_SETTINGS_EVENT, move |_event| {
        window_actions::toggle_settings_window(&settings_handle, append_desktop_log);
    });
}

fn forward_image_payload<F>(app_handle: &AppHandle, payload: &str, log: F)
where
    F: Fn(&str),
{
    let raw = match parse_forwardable_payload(payload) {
        Ok(raw) => raw,
        Err(error) => {
            log(&format!("dropping image payload: {error}"));
            return;
        }
    };

    if let Err(error) = app_handle.emit_to(IMAGE_WINDOW_LABEL, IMAGE_EVENT, &*raw) {
        log(&format!("failed to forward image payload: {error}"));
    }
}

// Payloads pass through untouched; an absent payload forwards as JSON null.
fn parse_forwardable_payload(payload: &str) -> Result<Box<RawValue>, String> {
    let trimmed = payload.trim();
    let effective = if trimmed.is_empty() { "null" } else { trimmed };

    RawValue::from_string(effective.to_string())
        .map_err(|error| format!("payload is not valid JSON: {error}"))
}

#[cfg(test)]
mod tests {
    use super::parse_forwardable_payload;

    #[test]
    fn payload_is_forwarded_verbatim() {
        let input = r#"{"path":"shots/a.png","zoom":2}"#;
        let raw = parse_forwardable_payload(input).expect("valid payload");
        assert_eq!(raw.get(), input);
    }

    #[test]
    fn scalar_payloads_are_accepted() {
        assert_eq!(parse_forwardable_payload("42").expect("number").get(), "42");
        assert_eq!(
            parse_forwardable_payload(r#""a.png""#).expect("string").get(),
            r#""a.png""#
        );
    }

    #[test]
    fn missing_payload_forwards_as_null() {
        assert_eq!(parse_forwardable_payload("").expect("empty").get(), "null");
        assert_eq!(parse_forwardable_payload("  ").expect("blank").get(), "null");
    }

    #[test]
    fn malformed_payload_is_rejected() {
        assert!(parse_forwardable_payload("{\"unterminated\":").is_err());
    }
}
