use tauri::{AppHandle, Manager, Window, WindowEvent};

use crate::{
    append_desktop_log, append_shutdown_log, window_actions,
    window_plan::{close_policy_for_label, ClosePolicy},
    ShellState, MAIN_WINDOW_LABEL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExitDecision {
    Exit,
    KeepRunning,
}

// Implicit exits (no code) keep macOS resident; explicit codes always quit.
pub(crate) fn decide_exit_requested(
    platform_is_macos: bool,
    exit_code: Option<i32>,
) -> ExitDecision {
    if exit_code.is_none() && platform_is_macos {
        ExitDecision::KeepRunning
    } else {
        ExitDecision::Exit
    }
}

pub(crate) fn handle_window_event(window: &Window, event: &WindowEvent) {
    match event {
        WindowEvent::CloseRequested { api, .. } => {
            if close_policy_for_label(window.label()) == ClosePolicy::HideInstead {
                api.prevent_close();
                if let Err(error) = window.hide() {
                    append_desktop_log(&format!(
                        "failed to hide {} window on close: {}",
                        window.label(),
                        error
                    ));
                }
            }
        }
        WindowEvent::Destroyed => {
            if window.label() == MAIN_WINDOW_LABEL {
                handle_primary_destroyed(window.app_handle());
            }
        }
        _ => {}
    }
}

// The popups share the primary window's lifetime.
fn handle_primary_destroyed(app_handle: &AppHandle) {
    let state = app_handle.state::<ShellState>();
    state.mark_primary_closed();
    append_desktop_log("primary window destroyed; tearing down popups");
    window_actions::destroy_auxiliary_windows(app_handle, append_desktop_log);
}

pub(crate) fn handle_exit_requested(code: Option<i32>, api: &tauri::ExitRequestApi) {
    match decide_exit_requested(cfg!(target_os = "macos"), code) {
        ExitDecision::KeepRunning => {
            api.prevent_exit();
            append_desktop_log("all windows closed; staying resident until re-activation");
        }
        ExitDecision::Exit => {
            append_shutdown_log("exit requested, quitting desktop process");
        }
    }
}

#[cfg(target_os = "macos")]
pub(crate) fn handle_reopen(app_handle: &AppHandle) {
    // bootstrap_windows is a no-op while the primary window is still open.
    append_desktop_log("application re-activated");
    if let Err(error) = crate::window_setup::bootstrap_windows(app_handle, append_desktop_log) {
        append_desktop_log(&format!(
            "failed to recreate windows on re-activation: {error}"
        ));
    }
}
