use std::sync::{atomic::AtomicU64, Arc};

use tauri::Webview;

use crate::{
    preferences::{JsonFilePreferenceStore, PreferenceStore},
    runtime_paths,
    scheduler::{AsyncRuntimeScheduler, Scheduler},
    webview_surface::WebviewSurface,
    ShellContext,
};

/// Process-wide shell state managed by Tauri.
pub(crate) struct ShellState {
    pub(crate) prefs: Arc<dyn PreferenceStore>,
    pub(crate) scheduler: Arc<dyn Scheduler>,
    element_ids: Arc<AtomicU64>,
}

impl ShellState {
    pub(crate) fn new(prefs: Arc<dyn PreferenceStore>, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            prefs,
            scheduler,
            element_ids: Arc::new(AtomicU64::new(0)),
        }
    }

    pub(crate) fn context_for(&self, webview: Webview) -> ShellContext {
        ShellContext::new(
            self.prefs.clone(),
            Arc::new(WebviewSurface::new(webview)),
            self.scheduler.clone(),
            self.element_ids.clone(),
        )
    }
}

impl Default for ShellState {
    fn default() -> Self {
        let state_path = runtime_paths::default_root_dir()
            .map(|root| runtime_paths::shell_state_path(&root))
            .unwrap_or_else(|| {
                runtime_paths::shell_state_path(&std::env::temp_dir().join("quartermaster"))
            });
        Self::new(
            Arc::new(JsonFilePreferenceStore::new(
                state_path,
                crate::append_desktop_log,
            )),
            Arc::new(AsyncRuntimeScheduler),
        )
    }
}

#[derive(Debug, serde::Serialize, PartialEq, Eq)]
pub(crate) struct ShellBridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

impl ShellBridgeResult {
    pub(crate) fn ok() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    pub(crate) fn failed(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
        }
    }

    pub(crate) fn from_result<T>(result: Result<T, String>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(error) => Self::failed(error),
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShellVersionInfo {
    pub(crate) version: &'static str,
    pub(crate) last_seen_version: Option<String>,
    pub(crate) theme: &'static str,
}
