use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{runtime_paths, DESKTOP_LOG_FILE};

const MAX_LOG_BYTES: u64 = 1024 * 1024;

pub fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    match root_dir {
        Some(root) => root.join("logs").join(file_name),
        None => std::env::temp_dir().join("quartermaster").join(file_name),
    }
}

fn format_log_line(scope: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        scope,
        message
    )
}

fn rotate_if_oversized(log_path: &Path, max_bytes: u64) {
    let Ok(metadata) = fs::metadata(log_path) else {
        return;
    };
    if metadata.len() < max_bytes {
        return;
    }

    let mut rotated = log_path.as_os_str().to_owned();
    rotated.push(".1");
    let _ = fs::rename(log_path, PathBuf::from(rotated));
}

fn append_log_line(log_path: &Path, line: &str) {
    if let Some(parent) = log_path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    rotate_if_oversized(log_path, MAX_LOG_BYTES);

    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_path) {
        let _ = file.write_all(line.as_bytes());
    }
}

fn append_scoped_log(scope: &str, message: &str) {
    let line = format_log_line(scope, message);
    if cfg!(debug_assertions) {
        eprint!("{line}");
    }

    let log_path =
        resolve_desktop_log_path(runtime_paths::default_root_dir(), DESKTOP_LOG_FILE);
    append_log_line(&log_path, &line);
}

pub fn append_startup_log(message: &str) {
    append_scoped_log("startup", message);
}

pub fn append_desktop_log(message: &str) {
    append_scoped_log("desktop", message);
}

pub fn append_update_log(message: &str) {
    append_scoped_log("update", message);
}
