use tauri::{AppHandle, Manager};

use crate::{IMAGE_WINDOW_LABEL, SETTINGS_WINDOW_LABEL};

// toggle-image always shows, never hides.
pub(crate) fn show_image_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(IMAGE_WINDOW_LABEL) else {
        log("toggle-image ignored: image window not found");
        return;
    };

    if let Err(error) = window.show() {
        log(&format!("failed to show image window: {error}"));
    }
}

pub(crate) fn toggle_settings_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(SETTINGS_WINDOW_LABEL) else {
        log("toggle-settings ignored: settings window not found");
        return;
    };

    let visible = match window.is_visible() {
        Ok(visible) => visible,
        Err(error) => {
            log(&format!(
                "failed to read settings window visibility, assuming hidden: {error}"
            ));
            false
        }
    };

    let result = if visible { window.hide() } else { window.show() };
    if let Err(error) = result {
        log(&format!("failed to toggle settings window: {error}"));
    }
}

// destroy() skips the hide-on-close interception.
pub(crate) fn destroy_auxiliary_windows<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    for label in [IMAGE_WINDOW_LABEL, SETTINGS_WINDOW_LABEL] {
        let Some(window) = app_handle.get_webview_window(label) else {
            continue;
        };
        if let Err(error) = window.destroy() {
            log(&format!("failed to destroy {label} window: {error}"));
        }
    }
}
