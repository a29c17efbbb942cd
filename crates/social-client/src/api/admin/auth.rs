//! Admin login/logout.

use crate::ApiClient;
use serde_json::{json, Value};
use social_core::models::LoginResult;
use social_core::{Result, SocialError};

impl ApiClient {
    /// Logs an administrator in and persists the returned token.
    pub async fn admin_login(&self, username: &str, password: &str) -> Result<LoginResult> {
        if username.trim().is_empty() {
            return Err(SocialError::invalid_input("用户名不能为空"));
        }

        let result: LoginResult = self
            .post(
                "/admin/auth/login",
                &json!({ "username": username, "password": password }),
            )
            .await?;

        if !result.token.is_empty() {
            self.session().set_token(&result.token)?;
        }
        Ok(result)
    }

    /// Fetches the authenticated administrator's identity.
    pub async fn admin_me(&self) -> Result<Value> {
        self.get("/admin/auth/me").await
    }

    /// Logs the administrator out server-side, then locally.
    pub async fn admin_logout(&self) -> Result<()> {
        let _: Value = self.post_empty("/admin/auth/logout").await?;
        self.session().clear_session()
    }
}
