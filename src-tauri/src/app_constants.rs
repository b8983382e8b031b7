pub const SHELL_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const MAIN_WINDOW_LABEL: &str = "main";
pub const MAIN_WINDOW_TITLE: &str = "Quartermaster Store";
pub const MAIN_WINDOW_WIDTH: f64 = 1200.0;
pub const MAIN_WINDOW_HEIGHT: f64 = 800.0;
pub const MAIN_DOCUMENT: &str = "index.html";

pub const DEFAULT_THEME_KEY: &str = "royal";
pub const SITE_LOGO: &str = "images/LOGO.jpg";

pub const PREF_LAST_SEEN_VERSION: &str = "last-seen-version";
pub const PREF_SITE_THEME: &str = "site-theme";

pub const DESKTOP_LOG_FILE: &str = "desktop.log";
pub const SHELL_STATE_FILE: &str = "shell_state.json";
pub const DEFAULT_ROOT_DIR_NAME: &str = ".quartermaster";

pub const ROOT_DIR_ENV: &str = "QUARTERMASTER_ROOT";
pub const AUTO_UPDATE_CHECK_ENV: &str = "QUARTERMASTER_AUTO_UPDATE_CHECK";
pub const UPDATE_ENDPOINT_ENV: &str = "QUARTERMASTER_UPDATE_ENDPOINT";
pub const DEVTOOLS_ENV: &str = "QUARTERMASTER_DEVTOOLS";
