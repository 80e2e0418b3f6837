use tauri::AppHandle;

use crate::StartupConfig;

// Development builds only: graceful-exit on stdin (Windows), SIGTERM (unix).
pub(crate) fn install_dev_exit_hooks(app_handle: &AppHandle, config: &StartupConfig) {
    if !config.development {
        return;
    }

    #[cfg(windows)]
    control_message::spawn_watcher(app_handle.clone());

    #[cfg(unix)]
    sigterm::spawn_watcher(app_handle.clone());

    #[cfg(not(any(windows, unix)))]
    let _ = app_handle;
}

#[cfg(any(windows, test))]
fn is_graceful_exit_message(raw: &str) -> bool {
    raw.trim() == crate::GRACEFUL_EXIT_MESSAGE
}

#[cfg(windows)]
mod control_message {
    use std::io::BufRead;

    use tauri::AppHandle;

    use crate::append_shutdown_log;

    pub(super) fn spawn_watcher(app_handle: AppHandle) {
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else {
                    return;
                };
                if super::is_graceful_exit_message(&line) {
                    append_shutdown_log("graceful-exit control message received");
                    app_handle.exit(0);
                    return;
                }
            }
        });
    }
}

#[cfg(unix)]
mod sigterm {
    use std::{
        sync::atomic::{AtomicBool, Ordering},
        time::Duration,
    };

    use tauri::AppHandle;

    use crate::append_shutdown_log;

    static SIGTERM_RECEIVED: AtomicBool = AtomicBool::new(false);

    // Only the atomic store is async-signal-safe; the watcher thread does
    // the actual quit.
    extern "C" fn record_sigterm(_signal: libc::c_int) {
        SIGTERM_RECEIVED.store(true, Ordering::SeqCst);
    }

    pub(super) fn spawn_watcher(app_handle: AppHandle) {
        unsafe {
            libc::signal(
                libc::SIGTERM,
                record_sigterm as extern "C" fn(libc::c_int) as libc::sighandler_t,
            );
        }

        std::thread::spawn(move || loop {
            if SIGTERM_RECEIVED.load(Ordering::SeqCst) {
                append_shutdown_log("SIGTERM received, quitting");
                app_handle.exit(0);
                return;
            }
            std::thread::sleep(Duration::from_millis(200));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::is_graceful_exit_message;

    #[test]
    fn exact_control_message_matches() {
        assert!(is_graceful_exit_message("graceful-exit"));
        assert!(is_graceful_exit_message("  graceful-exit \n"));
    }

    #[test]
    fn other_input_is_ignored() {
        assert!(!is_graceful_exit_message("graceful"));
        assert!(!is_graceful_exit_message("graceful-exit now"));
        assert!(!is_graceful_exit_message(""));
    }
}
