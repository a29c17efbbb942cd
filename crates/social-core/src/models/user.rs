//! User profile and login payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shallow cache of the backend-owned user record.
///
/// Cached for optimistic display only; the backend remains the source of
/// truth and every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: u64,
    pub open_id: String,
    pub union_id: String,
    pub nickname: String,
    pub avatar_url: String,
    pub status: i32,
    pub level: i32,
    pub exp: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `PUT /api/users/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub nickname: String,
    pub avatar_url: String,
}

/// Payload for `PUT /admin/users/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminUserUpdate {
    pub nickname: String,
    pub avatar_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

/// Response of `POST /api/auth/wechat/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResult {
    pub token: String,
    pub user: Option<UserProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_tolerates_sparse_payload() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id": 7, "nickname": "小明", "futureField": true}"#).unwrap();
        assert_eq!(profile.id, 7);
        assert_eq!(profile.nickname, "小明");
        assert!(profile.avatar_url.is_empty());
        assert!(profile.created_at.is_none());
    }

    #[test]
    fn test_login_result_without_user() {
        let result: LoginResult = serde_json::from_str(r#"{"token": "t-1"}"#).unwrap();
        assert_eq!(result.token, "t-1");
        assert!(result.user.is_none());
    }
}
