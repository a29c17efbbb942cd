//! Session domain model and storage contract.
//!
//! A session is the pair (bearer token, cached user profile). The two parts
//! are persisted as independent entries: the token authorizes requests, the
//! profile is an optimistic display copy and never a source of truth.

use crate::error::Result;
use crate::models::UserProfile;
use serde::{Deserialize, Serialize};

/// The client-held authenticated identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: Option<UserProfile>) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

/// Synchronous key-value persistence for the session.
///
/// Semantics are those of platform local storage: single writer,
/// last-write-wins, no TTL, no encryption. Reads are best-effort — a missing
/// or corrupt entry is `None`, never an error.
pub trait SessionStore: Send + Sync {
    /// Returns the persisted bearer token, if any.
    fn token(&self) -> Option<String>;

    /// Persists the bearer token, replacing any previous one.
    fn set_token(&self, token: &str) -> Result<()>;

    /// Removes the persisted token.
    fn clear_token(&self) -> Result<()>;

    /// Returns the cached user profile, if present and readable.
    fn user_cache(&self) -> Option<UserProfile>;

    /// Persists the cached user profile.
    fn set_user_cache(&self, user: &UserProfile) -> Result<()>;

    /// Removes the cached user profile.
    fn clear_user_cache(&self) -> Result<()>;

    /// Removes both entries. Called by the request layer on auth failure.
    fn clear_session(&self) -> Result<()> {
        self.clear_token()?;
        self.clear_user_cache()
    }

    /// Returns the full session when a token is present.
    fn session(&self) -> Option<Session> {
        let token = self.token()?;
        Some(Session::new(token, self.user_cache()))
    }
}
