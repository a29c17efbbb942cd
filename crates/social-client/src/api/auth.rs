//! Login and logout.

use crate::ApiClient;
use serde_json::json;
use social_core::models::LoginResult;
use social_core::{Result, SocialError};
use tracing::warn;

impl ApiClient {
    /// Exchanges a WeChat openId for a bearer token and profile.
    ///
    /// On success the token and profile are persisted, so subsequent calls
    /// carry the `Authorization` header without further setup.
    pub async fn wechat_login(&self, open_id: &str) -> Result<LoginResult> {
        let open_id = open_id.trim();
        if open_id.is_empty() {
            return Err(SocialError::invalid_input("openId 不能为空"));
        }

        let result: LoginResult = self
            .post("/api/auth/wechat/login", &json!({ "openId": open_id }))
            .await?;

        if result.token.is_empty() {
            warn!("login succeeded without a token; session not persisted");
            return Ok(result);
        }

        self.session().set_token(&result.token)?;
        match &result.user {
            Some(user) => self.session().set_user_cache(user)?,
            None => self.session().clear_user_cache()?,
        }

        Ok(result)
    }

    /// Discards the local session. Purely client-side.
    pub fn logout(&self) -> Result<()> {
        self.session().clear_session()
    }
}
