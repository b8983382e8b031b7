use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde_json::{Map, Value};

/// Small persisted string values that survive across sessions.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;

    /// Writes are durable once this returns `Ok`.
    fn set(&self, name: &str, value: &str) -> Result<(), String>;
}

fn empty_state_object() -> Value {
    Value::Object(Map::new())
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = empty_state_object();
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was just normalized into a JSON object"),
    }
}

pub type PreferenceLog = Box<dyn Fn(&str) + Send + Sync>;

/// Flat JSON object on disk, one key per preference. Unknown keys are preserved.
///
/// Writes go to a sibling temp file that is renamed over the state file, so a
/// concurrent `get` sees either the old or the new contents.
pub struct JsonFilePreferenceStore {
    state_path: PathBuf,
    write_lock: Mutex<()>,
    log: PreferenceLog,
}

impl JsonFilePreferenceStore {
    pub fn new<F>(state_path: PathBuf, log: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self {
            state_path,
            write_lock: Mutex::new(()),
            log: Box::new(log),
        }
    }

    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.state_path.as_os_str().to_owned();
        staging.push(".tmp");
        PathBuf::from(staging)
    }

    fn read_state(&self) -> Result<Value, String> {
        match fs::read_to_string(&self.state_path) {
            Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(value) => Ok(value),
                Err(error) => {
                    (self.log)(&format!(
                        "failed to parse shell state {}: {}. resetting state file",
                        self.state_path.display(),
                        error
                    ));
                    Ok(empty_state_object())
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                Ok(empty_state_object())
            }
            Err(error) => Err(format!(
                "Failed to read shell state {}: {}",
                self.state_path.display(),
                error
            )),
        }
    }

    fn replace_state_file(&self, serialized: &str) -> Result<(), String> {
        let staging_path = self.staging_path();
        fs::write(&staging_path, serialized).map_err(|error| {
            format!(
                "Failed to write shell state {}: {}",
                staging_path.display(),
                error
            )
        })?;
        fs::rename(&staging_path, &self.state_path).map_err(|error| {
            let _ = fs::remove_file(&staging_path);
            format!(
                "Failed to replace shell state {}: {}",
                self.state_path.display(),
                error
            )
        })
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, name: &str) -> Option<String> {
        let state = self.read_state().ok()?;
        state.get(name)?.as_str().map(str::to_string)
    }

    fn set(&self, name: &str, value: &str) -> Result<(), String> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| "Shell state lock poisoned.".to_string())?;

        if let Some(parent_dir) = self.state_path.parent() {
            fs::create_dir_all(parent_dir).map_err(|error| {
                format!(
                    "Failed to create shell state directory {}: {}",
                    parent_dir.display(),
                    error
                )
            })?;
        }

        let mut parsed = self.read_state()?;
        if !parsed.is_object() {
            (self.log)(&format!(
                "shell state {} has non-object root; resetting state file",
                self.state_path.display()
            ));
        }
        ensure_object(&mut parsed).insert(name.to_string(), Value::String(value.to_string()));

        let serialized = serde_json::to_string_pretty(&parsed)
            .map_err(|error| format!("Failed to serialize shell state: {error}"))?;
        self.replace_state_file(&serialized)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        thread,
    };

    use super::*;
    use crate::{PREF_LAST_SEEN_VERSION, PREF_SITE_THEME};

    fn store_in(dir: &tempfile::TempDir) -> JsonFilePreferenceStore {
        JsonFilePreferenceStore::new(dir.path().join("data").join("shell_state.json"), |_| {})
    }

    fn recording_store_in(
        dir: &tempfile::TempDir,
    ) -> (JsonFilePreferenceStore, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = lines.clone();
        let store = JsonFilePreferenceStore::new(
            dir.path().join("data").join("shell_state.json"),
            move |line: &str| sink.lock().expect("log lock").push(line.to_string()),
        );
        (store, lines)
    }

    #[test]
    fn get_returns_none_when_state_file_is_missing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = store_in(&dir);
        assert_eq!(store.get(PREF_SITE_THEME), None);
    }

    #[test]
    fn set_is_readable_by_a_fresh_store() {
        let dir = tempfile::tempdir().expect("create temp dir");
        store_in(&dir)
            .set(PREF_SITE_THEME, "emerald")
            .expect("persist theme");

        let next_session = store_in(&dir);
        assert_eq!(next_session.get(PREF_SITE_THEME).as_deref(), Some("emerald"));
    }

    #[test]
    fn set_preserves_other_keys() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = store_in(&dir);
        store.set(PREF_SITE_THEME, "navy").expect("persist theme");
        store
            .set(PREF_LAST_SEEN_VERSION, "1.0.3")
            .expect("persist version");

        assert_eq!(store.get(PREF_SITE_THEME).as_deref(), Some("navy"));
        assert_eq!(store.get(PREF_LAST_SEEN_VERSION).as_deref(), Some("1.0.3"));
    }

    #[test]
    fn corrupt_state_file_is_reset_on_write() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let (store, lines) = recording_store_in(&dir);
        fs::create_dir_all(store.state_path().parent().expect("parent")).expect("mkdir");
        fs::write(store.state_path(), "[1, 2,").expect("seed corrupt file");

        assert_eq!(store.get(PREF_SITE_THEME), None);
        store.set(PREF_SITE_THEME, "purple").expect("persist theme");
        assert_eq!(store.get(PREF_SITE_THEME).as_deref(), Some("purple"));
        assert!(lines
            .lock()
            .expect("log lock")
            .iter()
            .any(|line| line.contains("resetting state file")));
    }

    #[test]
    fn non_object_root_is_replaced() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let (store, lines) = recording_store_in(&dir);
        fs::create_dir_all(store.state_path().parent().expect("parent")).expect("mkdir");
        fs::write(store.state_path(), "\"royal\"").expect("seed string root");

        store.set(PREF_SITE_THEME, "forest").expect("persist theme");
        let raw = fs::read_to_string(store.state_path()).expect("read state");
        let parsed: Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(parsed[PREF_SITE_THEME], "forest");
        assert!(lines
            .lock()
            .expect("log lock")
            .iter()
            .any(|line| line.contains("non-object root")));
    }

    #[test]
    fn set_leaves_no_staging_file_behind() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = store_in(&dir);
        store.set(PREF_SITE_THEME, "royal").expect("persist theme");

        assert!(store.state_path().is_file());
        assert!(!store.staging_path().exists());
    }

    #[test]
    fn reads_during_writes_never_see_a_partial_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let (store, lines) = recording_store_in(&dir);
        let store = Arc::new(store);
        store.set(PREF_SITE_THEME, "royal").expect("seed theme");

        let writer_store = store.clone();
        let writer = thread::spawn(move || {
            for round in 0..200 {
                let key = if round % 2 == 0 { "scarlet" } else { "emerald" };
                writer_store.set(PREF_SITE_THEME, key).expect("persist theme");
                writer_store
                    .set(PREF_LAST_SEEN_VERSION, &format!("1.0.{round}"))
                    .expect("persist version");
            }
        });

        for _ in 0..400 {
            assert!(store.get(PREF_SITE_THEME).is_some());
        }
        writer.join().expect("writer thread");

        assert!(lines.lock().expect("log lock").is_empty());
    }

    #[test]
    fn non_string_values_read_as_absent() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = store_in(&dir);
        fs::create_dir_all(store.state_path().parent().expect("parent")).expect("mkdir");
        fs::write(store.state_path(), r#"{"site-theme": 7}"#).expect("seed state");

        assert_eq!(store.get(PREF_SITE_THEME), None);
    }
}
