use tauri::{webview::PageLoadEvent, Manager, RunEvent};

use crate::{
    app_updater, append_desktop_log, append_startup_log, logging, runtime_paths, shell_session,
    view_composer,
    window_lifecycle::{self, AllWindowsClosedDecision, HostPlatform},
    ShellState, DESKTOP_LOG_FILE, MAIN_WINDOW_LABEL, SHELL_VERSION,
};

pub(crate) fn run() {
    append_startup_log(&format!("desktop process starting, version {SHELL_VERSION}"));
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(runtime_paths::default_root_dir(), DESKTOP_LOG_FILE)
            .display()
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _argv, _cwd| {
            append_desktop_log("second instance launched; activating main window");
            window_lifecycle::handle_activate(app_handle);
        }))
        .plugin(tauri_plugin_updater::Builder::new().build())
        .manage(ShellState::default())
        .invoke_handler(tauri::generate_handler![
            crate::shell_commands::shell_apply_theme,
            crate::shell_commands::shell_list_themes,
            crate::shell_commands::shell_notify,
            crate::shell_commands::shell_dismiss_patch_notes,
            crate::shell_commands::shell_patch_notes_history,
            crate::shell_commands::shell_open_external_url,
            crate::shell_commands::shell_version,
        ])
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!("page-load started: {}", payload.url()));
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!("page-load finished: {}", payload.url()));
                if webview.label() != MAIN_WINDOW_LABEL {
                    return;
                }

                let state = webview.app_handle().state::<ShellState>();
                let ctx = state.context_for(webview.clone());
                let route = view_composer::route_from_path(payload.url().path());
                let failed =
                    shell_session::on_document_ready(&ctx, &route, SHELL_VERSION, append_desktop_log);
                if !failed.is_empty() {
                    append_desktop_log(&format!(
                        "page bootstrap for {route} finished with {} failed step(s)",
                        failed.len()
                    ));
                }
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            if let Err(error) = window_lifecycle::create_main_window(&app_handle) {
                append_startup_log(&format!("startup failed: {error}"));
                app_handle.exit(1);
                return Ok(());
            }

            tauri::async_runtime::spawn(app_updater::check_for_updates(app_handle));
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code, api, .. } => {
                // `code` is only set for explicit exits; `None` means the last window closed.
                if code.is_none()
                    && window_lifecycle::decide_all_windows_closed(HostPlatform::current())
                        == AllWindowsClosedDecision::StayResident
                {
                    append_desktop_log("all windows closed; staying resident");
                    api.prevent_exit();
                }
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                window_lifecycle::handle_activate(app_handle);
            }
            _ => {}
        });
}
