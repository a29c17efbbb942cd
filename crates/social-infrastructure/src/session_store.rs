//! File-backed session persistence.
//!
//! The token and the cached user profile are two independent entries, as in
//! the original local-storage layout. No TTL, no encryption, no cross-process
//! coordination: concurrent writers race and the last write wins.

use crate::paths::SocialPaths;
use social_core::models::UserProfile;
use social_core::{Result, SessionStore, SocialError};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Session store persisting to plain files under the config directory.
///
/// Reads are best-effort: a missing or unreadable entry is `None`. Writes
/// create the directory on demand and keep the token file at mode 600 on
/// Unix.
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Creates a store rooted at the default config directory.
    pub fn new() -> Result<Self> {
        let dir = SocialPaths::config_dir().map_err(|e| SocialError::storage(e.to_string()))?;
        Ok(Self { dir })
    }

    /// Creates a store rooted at a custom directory (for testing).
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join("token")
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join("user.json")
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }

    fn remove_entry(&self, path: PathBuf) -> Result<()> {
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        let raw = fs::read_to_string(self.token_path()).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            return None;
        }
        Some(token.to_string())
    }

    fn set_token(&self, token: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.token_path();
        fs::write(&path, token)?;

        // Token file is readable by the owner only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        self.remove_entry(self.token_path())
    }

    fn user_cache(&self) -> Option<UserProfile> {
        let raw = fs::read_to_string(self.user_path()).ok()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                debug!("discarding unreadable user cache: {}", e);
                None
            }
        }
    }

    fn set_user_cache(&self, user: &UserProfile) -> Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(user)?;
        fs::write(self.user_path(), json)?;
        Ok(())
    }

    fn clear_user_cache(&self) -> Result<()> {
        self.remove_entry(self.user_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileSessionStore) {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_dir(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn test_token_round_trip() {
        let (_dir, store) = store();
        assert!(store.token().is_none());

        store.set_token("tok-123").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok-123"));

        store.clear_token().unwrap();
        assert!(store.token().is_none());
    }

    #[test]
    fn test_user_cache_round_trip() {
        let (_dir, store) = store();
        let user = UserProfile {
            id: 42,
            nickname: "小红".to_string(),
            avatar_url: "https://cdn.example.com/a.png".to_string(),
            ..UserProfile::default()
        };

        store.set_user_cache(&user).unwrap();
        assert_eq!(store.user_cache(), Some(user));

        store.clear_user_cache().unwrap();
        assert!(store.user_cache().is_none());
    }

    #[test]
    fn test_corrupt_user_cache_reads_as_none() {
        let (dir, store) = store();
        fs::write(dir.path().join("user.json"), "{ not json").unwrap();
        assert!(store.user_cache().is_none());
    }

    #[test]
    fn test_clear_session_removes_both_entries() {
        let (_dir, store) = store();
        store.set_token("tok").unwrap();
        store.set_user_cache(&UserProfile::default()).unwrap();

        store.clear_session().unwrap();
        assert!(store.token().is_none());
        assert!(store.user_cache().is_none());
    }

    #[test]
    fn test_clearing_an_empty_store_is_fine() {
        let (_dir, store) = store();
        store.clear_session().unwrap();
    }

    #[test]
    fn test_last_write_wins() {
        let (_dir, store) = store();
        store.set_token("first").unwrap();
        store.set_token("second").unwrap();
        assert_eq!(store.token().as_deref(), Some("second"));
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_mode() {
        use std::os::unix::fs::PermissionsExt;
        let (dir, store) = store();
        store.set_token("tok").unwrap();
        let mode = fs::metadata(dir.path().join("token"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
