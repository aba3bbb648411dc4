//! # File-backed session store
//!
//! [`FileSessionStore`] keeps the session entries in a single JSON object on
//! disk so a login survives across process runs. The file is re-read on every
//! access; a missing or unreadable file behaves as an empty store.
//!
//! Writes go to a staging file that is renamed over the target. On Unix the
//! file is readable by its owner only.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use super::SessionStore;

type Entries = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Entries {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Entries::new(),
            Err(err) => {
                warn!("Failed to read session file {}: {err}", self.path.display());
                return Entries::new();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|err| {
            warn!("Ignoring corrupt session file {}: {err}", self.path.display());
            Entries::new()
        })
    }

    fn save(&self, entries: &Entries) {
        if let Err(err) = self.try_save(entries) {
            warn!("Failed to write session file {}: {err}", self.path.display());
        }
    }

    fn try_save(&self, entries: &Entries) -> std::io::Result<()> {
        if entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Err(err) if err.kind() != std::io::ErrorKind::NotFound => Err(err),
                _ => Ok(()),
            };
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;

        // Readers in other processes only ever see a complete file
        let staging = self.staging_path();
        if let Err(err) = write_private(&staging, content.as_bytes()) {
            let _ = std::fs::remove_file(&staging);
            return Err(err);
        }
        std::fs::rename(&staging, &self.path)
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }

    fn update(&self, apply: impl FnOnce(&mut Entries)) {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.load();
        apply(&mut entries);
        self.save(&entries);
    }
}

/// Write `content` to `path`, readable and writable by the owner only
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;

    // A leftover staging file keeps its old mode, so tighten it explicitly
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(content)?;
    file.sync_all()
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        });
    }

    fn remove(&self, key: &str) {
        self.update(|entries| {
            entries.remove(key);
        });
    }

    fn set_many(&self, pairs: &[(&str, &str)]) {
        self.update(|entries| {
            for (key, value) in pairs {
                entries.insert((*key).to_string(), (*value).to_string());
            }
        });
    }

    fn remove_many(&self, keys: &[&str]) {
        self.update(|entries| {
            for key in keys {
                entries.remove(*key);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, Session};
    use std::sync::Arc;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        assert!(store.get(ACCESS_TOKEN_KEY).is_none());
    }

    #[test]
    fn test_entries_survive_a_new_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let session = Session::new(Arc::new(FileSessionStore::new(&path)));
        session.set_tokens("access-1", "refresh-1");
        assert!(path.exists());

        let reopened = Session::new(Arc::new(FileSessionStore::new(&path)));
        assert_eq!(reopened.access_token().as_deref(), Some("access-1"));
        assert_eq!(reopened.refresh_token().as_deref(), Some("refresh-1"));
    }

    #[test]
    fn test_clearing_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let session = Session::new(Arc::new(FileSessionStore::new(&path)));

        session.set_tokens("a", "r");
        session.clear();

        assert!(!path.exists());
        assert!(session.refresh_token().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let session = Session::new(Arc::new(FileSessionStore::new(&path)));

        session.set_tokens("a", "secret-refresh");

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "session file mode is {mode:o}");
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_world_readable_file_is_tightened() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{}").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        FileSessionStore::new(&path).set(REFRESH_TOKEN_KEY, "r");

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "session file mode is {mode:o}");
    }

    #[test]
    fn test_save_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::new(&path);

        store.set_many(&[(ACCESS_TOKEN_KEY, "a"), (REFRESH_TOKEN_KEY, "r")]);
        store.set(ACCESS_TOKEN_KEY, "b");

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("session.json")]);
        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("b"));
    }

    #[test]
    fn test_corrupt_file_reads_empty_and_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(store.get(REFRESH_TOKEN_KEY).is_none());

        store.set(REFRESH_TOKEN_KEY, "r");
        assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("r"));
    }
}
