//! File-backed session storage for the CLI.
//!
//! The session is a flat JSON object of key to string value, written with
//! owner-only permissions on unix.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use shared::session::{SessionStorage, StorageError};
use tracing::{debug, warn};

/// Default location of the session file.
pub fn default_session_path() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("fitz").join("session.json"))
        .unwrap_or_else(|| PathBuf::from("./fitz-session.json"))
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> BTreeMap<String, String> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&contents).unwrap_or_else(|error| {
            warn!(path = %self.path.display(), %error, "ignoring unreadable session file");
            BTreeMap::new()
        })
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), String> {
        if entries.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path).map_err(|error| error.to_string())?;
            }
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|error| error.to_string())?;
        }
        let json = serde_json::to_string_pretty(entries).map_err(|error| error.to_string())?;
        fs::write(&self.path, json).map_err(|error| error.to_string())?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(|error| error.to_string())?;
        }
        debug!(path = %self.path.display(), "session file written");
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read();
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries).map_err(|reason| StorageError::Write {
            key: key.to_string(),
            reason,
        })
    }

    fn remove(&mut self, key: &str) {
        let mut entries = self.read();
        if entries.remove(key).is_some() {
            if let Err(reason) = self.write(&entries) {
                warn!(key, %reason, "failed to remove session entry");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SessionStore;
    use shared::models::User;
    use shared::session::{TOKEN_KEY, USER_KEY};

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));
        assert!(storage.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let mut storage = FileStorage::new(&path);

        storage.set(TOKEN_KEY, "t1").unwrap();
        storage.set(USER_KEY, "{}").unwrap();
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t1"));
        assert!(path.exists());

        storage.remove(TOKEN_KEY);
        storage.remove(USER_KEY);
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut storage = FileStorage::new(&path);
        storage.set(TOKEN_KEY, "t1").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        let storage = FileStorage::new(&path);
        assert!(storage.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_session_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut storage = FileStorage::new(&path);
        let user = User {
            username: "lifter".to_string(),
            ..User::default()
        };
        storage.set(TOKEN_KEY, "t1").unwrap();
        storage
            .set(USER_KEY, &serde_json::to_string(&user).unwrap())
            .unwrap();

        let store = SessionStore::restore(FileStorage::new(&path));
        assert_eq!(store.token(), Some("t1"));
        assert_eq!(store.user().map(|user| user.username.as_str()), Some("lifter"));
    }
}
