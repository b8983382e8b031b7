use std::{env, time::Instant};

use tauri::AppHandle;
use tauri_plugin_updater::UpdaterExt;
use url::Url;

use crate::{append_update_log, AUTO_UPDATE_CHECK_ENV, UPDATE_ENDPOINT_ENV};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateLifecycleEvent {
    Available { version: String },
    Downloaded { version: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    LogOnly,
    InstallAndRestart,
}

/// A downloaded update is installed without asking.
pub fn decide_update_action(event: &UpdateLifecycleEvent) -> UpdateAction {
    match event {
        UpdateLifecycleEvent::Available { .. } => UpdateAction::LogOnly,
        UpdateLifecycleEvent::Downloaded { .. } => UpdateAction::InstallAndRestart,
    }
}

pub fn auto_update_check_enabled(raw: Option<&str>) -> bool {
    !matches!(
        raw.map(|value| value.trim().to_ascii_lowercase()).as_deref(),
        Some("0") | Some("false") | Some("off")
    )
}

pub fn endpoint_override(raw: Option<&str>) -> Result<Option<Url>, String> {
    let Some(trimmed) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    let parsed = Url::parse(trimmed)
        .map_err(|error| format!("Invalid {UPDATE_ENDPOINT_ENV} '{trimmed}': {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(Some(parsed)),
        scheme => Err(format!(
            "Unsupported {UPDATE_ENDPOINT_ENV} scheme '{scheme}', only http/https are allowed."
        )),
    }
}

fn build_updater(app_handle: &AppHandle) -> Result<tauri_plugin_updater::Updater, String> {
    let endpoint = endpoint_override(env::var(UPDATE_ENDPOINT_ENV).ok().as_deref())?;
    let mut builder = app_handle.updater_builder();
    if let Some(endpoint) = endpoint {
        append_update_log(&format!("using update feed override {endpoint}"));
        builder = builder
            .endpoints(vec![endpoint])
            .map_err(|error| format!("Failed to set update endpoint: {error}"))?;
    }
    builder
        .build()
        .map_err(|error| format!("Failed to initialize updater: {error}"))
}

fn log_lifecycle_event(event: &UpdateLifecycleEvent) -> UpdateAction {
    match event {
        UpdateLifecycleEvent::Available { version } => {
            append_update_log(&format!("Update available: {version}"));
        }
        UpdateLifecycleEvent::Downloaded { version } => {
            append_update_log(&format!("update {version} downloaded"));
        }
    }
    decide_update_action(event)
}

/// Checks the feed once, downloads any update and installs it.
pub async fn check_for_updates(app_handle: AppHandle) {
    let current_version = app_handle.package_info().version.to_string();
    if !auto_update_check_enabled(env::var(AUTO_UPDATE_CHECK_ENV).ok().as_deref()) {
        append_update_log("automatic update check disabled; skipping");
        return;
    }

    let updater = match build_updater(&app_handle) {
        Ok(updater) => updater,
        Err(error) => {
            append_update_log(&error);
            return;
        }
    };

    let check_started = Instant::now();
    let update = match updater.check().await {
        Ok(Some(update)) => update,
        Ok(None) => {
            append_update_log(&format!(
                "check complete: has_update=false current_version={} elapsed_ms={}",
                current_version,
                check_started.elapsed().as_millis()
            ));
            return;
        }
        Err(error) => {
            append_update_log(&format!(
                "check failed (ignored): current_version={} elapsed_ms={} error={}",
                current_version,
                check_started.elapsed().as_millis(),
                error
            ));
            return;
        }
    };

    let version = update.version.to_string();
    log_lifecycle_event(&UpdateLifecycleEvent::Available {
        version: version.clone(),
    });

    let downloaded_bytes = match update.download(|_, _| {}, || {}).await {
        Ok(bytes) => bytes,
        Err(error) => {
            append_update_log(&format!("failed to download update {version}: {error}"));
            return;
        }
    };

    let downloaded = UpdateLifecycleEvent::Downloaded {
        version: version.clone(),
    };
    if log_lifecycle_event(&downloaded) != UpdateAction::InstallAndRestart {
        return;
    }
    if let Err(error) = update.install(&downloaded_bytes) {
        append_update_log(&format!("failed to install update {version}: {error}"));
        return;
    }
    append_update_log(&format!("update {version} installed; restarting"));
    app_handle.request_restart();
}
