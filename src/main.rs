#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod bridge_events;
mod exit_events;
mod logging;
mod packaged_protocol;
mod runtime_paths;
mod shutdown_signals;
mod startup_config;
mod window_actions;
mod window_plan;
mod window_setup;

pub(crate) use app_constants::*;
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};
pub(crate) use startup_config::{ShellState, StartupConfig};

fn main() {
    app_runtime::run();
}
