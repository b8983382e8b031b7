#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod app_updater;
mod document_surface;
mod logging;
mod notifications;
mod patch_notes;
mod preferences;
mod runtime_paths;
mod scheduler;
mod shell_commands;
mod shell_context;
mod shell_effects;
mod shell_session;
mod theme_catalog;
mod theme_switch;
mod view_composer;
mod webview_surface;
mod window_lifecycle;

#[cfg(test)]
mod test_support;

pub(crate) use app_constants::*;
pub(crate) use app_types::{ShellBridgeResult, ShellState};
pub(crate) use logging::{append_desktop_log, append_startup_log, append_update_log};
pub(crate) use shell_context::ShellContext;

fn main() {
    app_runtime::run();
}
