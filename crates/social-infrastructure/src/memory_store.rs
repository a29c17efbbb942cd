//! In-memory session store.

use social_core::models::UserProfile;
use social_core::{Result, SessionStore};
use std::sync::RwLock;

#[derive(Default)]
struct Entries {
    token: Option<String>,
    user: Option<UserProfile>,
}

/// Session store holding both entries in memory.
///
/// Used by tests and by callers that must not persist credentials. Lock
/// poisoning is treated as an empty store; the session is disposable state.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: RwLock<Entries>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.entries.read().ok()?.token.clone()
    }

    fn set_token(&self, token: &str) -> Result<()> {
        if let Ok(mut entries) = self.entries.write() {
            entries.token = Some(token.to_string());
        }
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        if let Ok(mut entries) = self.entries.write() {
            entries.token = None;
        }
        Ok(())
    }

    fn user_cache(&self) -> Option<UserProfile> {
        self.entries.read().ok()?.user.clone()
    }

    fn set_user_cache(&self, user: &UserProfile) -> Result<()> {
        if let Ok(mut entries) = self.entries.write() {
            entries.user = Some(user.clone());
        }
        Ok(())
    }

    fn clear_user_cache(&self) -> Result<()> {
        if let Ok(mut entries) = self.entries.write() {
            entries.user = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let store = MemorySessionStore::new();
        assert!(store.session().is_none());

        store.set_token("tok").unwrap();
        let user = UserProfile {
            id: 1,
            ..UserProfile::default()
        };
        store.set_user_cache(&user).unwrap();

        let session = store.session().unwrap();
        assert_eq!(session.token, "tok");
        assert_eq!(session.user, Some(user));

        store.clear_session().unwrap();
        assert!(store.token().is_none());
        assert!(store.user_cache().is_none());
    }
}
