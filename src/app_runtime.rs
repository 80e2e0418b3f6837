use tauri::{Manager, RunEvent};

use crate::{
    append_shutdown_log, append_startup_log, bridge_events, exit_events, packaged_protocol,
    shutdown_signals, window_setup, ShellState, StartupConfig, PACKAGED_SCHEME,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    let config = StartupConfig::resolve(append_startup_log);
    append_startup_log(&format!(
        "startup config: development={} test_mode={} dev_server={}",
        config.development,
        config.test_mode,
        config
            .dev_server_url
            .as_ref()
            .map(url::Url::as_str)
            .unwrap_or("<packaged>")
    ));

    tauri::Builder::default()
        .manage(ShellState::new(config))
        .register_uri_scheme_protocol(PACKAGED_SCHEME, |ctx, request| {
            packaged_protocol::handle_request(ctx.app_handle(), request)
        })
        .on_window_event(exit_events::handle_window_event)
        .setup(|app| {
            let app_handle = app.handle().clone();

            if let Err(error) = window_setup::bootstrap_windows(&app_handle, append_startup_log) {
                return Err(error.into());
            }

            bridge_events::register_bridge_listeners(&app_handle);

            let state = app_handle.state::<ShellState>();
            shutdown_signals::install_dev_exit_hooks(&app_handle, &state.config);

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code, api, .. } => {
                exit_events::handle_exit_requested(code, &api);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                exit_events::handle_reopen(app_handle);
            }
            RunEvent::Exit => {
                append_shutdown_log("desktop process exiting");
                let _ = app_handle;
            }
            _ => {}
        });
}
