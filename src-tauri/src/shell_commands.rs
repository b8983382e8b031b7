use std::process::{Command, Stdio};

use tauri::{State, Webview};
use url::Url;

use crate::{
    app_types::ShellVersionInfo,
    append_desktop_log,
    notifications::{self, Severity},
    patch_notes::{self, PatchNote},
    theme_catalog::{self, ThemeSummary},
    theme_switch::{self, ThemeApplyOutcome},
    ShellBridgeResult, ShellState, PREF_LAST_SEEN_VERSION, SHELL_VERSION,
};

pub const NOTIFY_COMMAND: &str = "shell_notify";
pub const OPEN_EXTERNAL_URL_COMMAND: &str = "shell_open_external_url";

fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err("Missing external URL.".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("Invalid URL: {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "Unsupported URL scheme '{scheme}', only http/https are allowed."
        )),
    }
}

#[cfg(target_os = "macos")]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("open")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'open': {error}"))
}

#[cfg(target_os = "windows")]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("rundll32")
        .args(["url.dll,FileProtocolHandler", url])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'rundll32': {error}"))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("xdg-open")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'xdg-open': {error}"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
fn open_url_with_system_browser(_url: &str) -> Result<(), String> {
    Err("Opening external URLs is not supported on this platform.".to_string())
}

#[tauri::command]
pub(crate) fn shell_apply_theme(
    webview: Webview,
    state: State<'_, ShellState>,
    key: String,
) -> ShellBridgeResult {
    let ctx = state.context_for(webview);
    match theme_switch::apply_theme(&ctx, &key) {
        Ok(ThemeApplyOutcome::Applied) => ShellBridgeResult::ok(),
        Ok(ThemeApplyOutcome::UnknownTheme) => ShellBridgeResult {
            ok: true,
            reason: Some(format!("unknown theme '{key}' ignored")),
        },
        Err(error) => {
            append_desktop_log(&format!("failed to apply theme {key}: {error}"));
            ShellBridgeResult::failed(error)
        }
    }
}

#[tauri::command]
pub(crate) fn shell_list_themes() -> Vec<ThemeSummary> {
    theme_catalog::theme_summaries()
}

#[tauri::command]
pub(crate) fn shell_notify(
    webview: Webview,
    state: State<'_, ShellState>,
    message: String,
    severity: Option<String>,
) -> ShellBridgeResult {
    let severity = match severity.as_deref().map(str::parse::<Severity>) {
        None => Severity::Success,
        Some(Ok(severity)) => severity,
        Some(Err(error)) => return ShellBridgeResult::failed(error),
    };

    let ctx = state.context_for(webview);
    ShellBridgeResult::from_result(notifications::notify(&ctx, &message, severity))
}

#[tauri::command]
pub(crate) fn shell_dismiss_patch_notes(
    webview: Webview,
    state: State<'_, ShellState>,
) -> ShellBridgeResult {
    let ctx = state.context_for(webview);
    let result = patch_notes::dismiss_patch_notes(&ctx);
    if let Err(error) = &result {
        append_desktop_log(&format!("failed to dismiss patch notes: {error}"));
    }
    ShellBridgeResult::from_result(result)
}

#[tauri::command]
pub(crate) fn shell_patch_notes_history() -> Vec<&'static PatchNote> {
    patch_notes::patch_notes_history()
}

#[tauri::command]
pub(crate) fn shell_open_external_url(url: String) -> ShellBridgeResult {
    let parsed = match parse_openable_url(&url) {
        Ok(parsed) => parsed,
        Err(error) => return ShellBridgeResult::failed(error),
    };

    match open_url_with_system_browser(parsed.as_ref()) {
        Ok(()) => ShellBridgeResult::ok(),
        Err(error) => {
            append_desktop_log(&format!("failed to open external url: {error}"));
            ShellBridgeResult::failed(error)
        }
    }
}

#[tauri::command]
pub(crate) fn shell_version(state: State<'_, ShellState>) -> ShellVersionInfo {
    ShellVersionInfo {
        version: SHELL_VERSION,
        last_seen_version: state.prefs.get(PREF_LAST_SEEN_VERSION),
        theme: theme_catalog::saved_theme_key(state.prefs.as_ref()),
    }
}
