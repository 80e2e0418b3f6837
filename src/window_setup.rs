use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use url::Url;

use crate::{
    window_plan::{self, WindowKind},
    ShellState, StartupConfig, MAIN_WINDOW_LABEL,
};

// Runs at setup and again on macOS re-activation.
pub(crate) fn bootstrap_windows<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    let state = app_handle.state::<ShellState>();
    if state.is_primary_open() {
        log("window bootstrap skipped: window set already present");
        return Ok(());
    }
    let config = state.config.clone();

    let main_window = build_window(app_handle, WindowKind::Main, &config, None)?;
    for kind in WindowKind::ALL {
        if kind.parented_to_main() {
            build_window(app_handle, kind, &config, Some(&main_window))?;
        }
    }
    state.mark_primary_open();

    log(&format!(
        "window set created ({} content)",
        if config.dev_server_url.is_some() {
            "dev-server"
        } else {
            "packaged"
        }
    ));

    if config.devtools_enabled() {
        if let Err(error) = open_main_devtools(app_handle) {
            log(&format!("devtools failed to open: {error}"));
        }
    }

    Ok(())
}

fn build_window(
    app_handle: &AppHandle,
    kind: WindowKind,
    config: &StartupConfig,
    parent: Option<&WebviewWindow>,
) -> Result<WebviewWindow, String> {
    let url = window_plan::content_url(kind, config)?;
    let (width, height) = kind.inner_size();

    let mut builder = WebviewWindowBuilder::new(app_handle, kind.label(), webview_url_for(url))
        .title(kind.title())
        .inner_size(width, height)
        .visible(kind.initially_visible());

    if let Some(parent) = parent {
        builder = builder.parent(parent).map_err(|error| {
            format!(
                "Failed to parent {} window to {}: {}",
                kind.label(),
                MAIN_WINDOW_LABEL,
                error
            )
        })?;
    }

    builder
        .build()
        .map_err(|error| format!("Failed to create {} window: {}", kind.label(), error))
}

fn webview_url_for(url: Url) -> WebviewUrl {
    match url.scheme() {
        "http" | "https" => WebviewUrl::External(url),
        _ => WebviewUrl::CustomProtocol(url),
    }
}

#[cfg(debug_assertions)]
pub(crate) fn open_main_devtools(app_handle: &AppHandle) -> Result<(), String> {
    let window = app_handle
        .get_webview_window(MAIN_WINDOW_LABEL)
        .ok_or_else(|| "main window is not available".to_string())?;

    window.open_devtools();
    // Devtools steal focus from the window that spawned them.
    window
        .set_focus()
        .map_err(|error| format!("failed to refocus main window after devtools: {error}"))
}

#[cfg(not(debug_assertions))]
pub(crate) fn open_main_devtools(_app_handle: &AppHandle) -> Result<(), String> {
    Err("devtools are not compiled into release builds".to_string())
}

#[cfg(test)]
mod tests {
    use super::webview_url_for;
    use tauri::WebviewUrl;
    use url::Url;

    #[test]
    fn http_urls_load_as_external_content() {
        let url = Url::parse("http://localhost:8080/#/image").expect("url");
        assert!(matches!(webview_url_for(url), WebviewUrl::External(_)));
    }

    #[test]
    fn app_scheme_urls_load_through_the_custom_protocol() {
        let url = Url::parse("app://localhost/index.html#settings").expect("url");
        assert!(matches!(webview_url_for(url), WebviewUrl::CustomProtocol(_)));
    }
}
