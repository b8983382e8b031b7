use std::env;

use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::{
    append_desktop_log, DEVTOOLS_ENV, MAIN_DOCUMENT, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL,
    MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    MacOs,
    Other,
}

impl HostPlatform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            HostPlatform::MacOs
        } else {
            HostPlatform::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllWindowsClosedDecision {
    ExitProcess,
    StayResident,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivateDecision {
    CreateMainWindow,
    FocusExisting,
}

pub fn decide_all_windows_closed(platform: HostPlatform) -> AllWindowsClosedDecision {
    match platform {
        HostPlatform::MacOs => AllWindowsClosedDecision::StayResident,
        HostPlatform::Other => AllWindowsClosedDecision::ExitProcess,
    }
}

pub fn decide_activate(open_windows: usize) -> ActivateDecision {
    if open_windows == 0 {
        ActivateDecision::CreateMainWindow
    } else {
        ActivateDecision::FocusExisting
    }
}

fn devtools_requested(raw: Option<&str>) -> bool {
    matches!(raw.map(str::trim), Some("1") | Some("true"))
}

pub fn create_main_window(app_handle: &AppHandle) -> Result<WebviewWindow, String> {
    let window = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::App(MAIN_DOCUMENT.into()),
    )
    .title(MAIN_WINDOW_TITLE)
    .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
    .build()
    .map_err(|error| format!("Failed to create main window: {error}"))?;

    if devtools_requested(env::var(DEVTOOLS_ENV).ok().as_deref()) {
        open_devtools_if_available(&window);
    }
    Ok(window)
}

#[cfg(debug_assertions)]
fn open_devtools_if_available(window: &WebviewWindow) {
    window.open_devtools();
}

#[cfg(not(debug_assertions))]
fn open_devtools_if_available(_window: &WebviewWindow) {
    append_desktop_log("devtools requested but unavailable in release builds; ignoring");
}

/// Dock activation or a second launch: recreate the window if none is open,
/// otherwise bring the main window forward.
pub fn handle_activate(app_handle: &AppHandle) {
    let open_windows = app_handle.webview_windows().len();
    match decide_activate(open_windows) {
        ActivateDecision::CreateMainWindow => {
            if let Err(error) = create_main_window(app_handle) {
                append_desktop_log(&format!("failed to recreate main window: {error}"));
            }
        }
        ActivateDecision::FocusExisting => {
            let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
                return;
            };
            if let Err(error) = window.unminimize() {
                append_desktop_log(&format!("failed to unminimize main window: {error}"));
            }
            if let Err(error) = window.show() {
                append_desktop_log(&format!("failed to show main window: {error}"));
            }
            if let Err(error) = window.set_focus() {
                append_desktop_log(&format!("failed to focus main window: {error}"));
            }
        }
    }
}
