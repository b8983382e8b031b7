use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{DEFAULT_ROOT_DIR_NAME, ROOT_DIR_ENV, SHELL_STATE_FILE};

pub fn default_root_dir() -> Option<PathBuf> {
    root_dir_from_override(env::var(ROOT_DIR_ENV).ok().as_deref())
        .or_else(|| home::home_dir().map(|home| home.join(DEFAULT_ROOT_DIR_NAME)))
}

fn root_dir_from_override(raw: Option<&str>) -> Option<PathBuf> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

pub fn shell_state_path(root_dir: &Path) -> PathBuf {
    root_dir.join("data").join(SHELL_STATE_FILE)
}
