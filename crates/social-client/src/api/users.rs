//! Current-user profile endpoints.

use crate::ApiClient;
use social_core::models::{UpdateProfileRequest, UserProfile};
use social_core::Result;
use tracing::warn;

impl ApiClient {
    /// Fetches the authenticated user's profile.
    pub async fn me(&self) -> Result<UserProfile> {
        self.get("/api/users/me").await
    }

    /// Updates nickname/avatar and refreshes the cached profile.
    pub async fn update_me(&self, update: &UpdateProfileRequest) -> Result<UserProfile> {
        let user: UserProfile = self.put("/api/users/me", update).await?;
        if let Err(e) = self.session().set_user_cache(&user) {
            // The backend accepted the edit; a stale cache only affects display
            warn!("failed to refresh cached profile: {}", e);
        }
        Ok(user)
    }
}
