//! Tournament payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tournament (`/api/tournaments`, `/admin/tournaments`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tournament {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub cover_url: String,
    pub image_urls: Vec<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    /// DRAFT / PUBLISHED / FINISHED / CANCELED.
    pub status: String,
    pub created_by_admin_id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update payload for the admin tournament endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentInput {
    pub title: String,
    pub content: String,
    pub cover_url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub image_urls: Vec<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub status: String,
}

/// A tournament the current user joined, with enrollment info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JoinedTournament {
    #[serde(flatten)]
    pub tournament: Tournament,
    pub join_status: String,
    pub joined_at: Option<DateTime<Utc>>,
}

/// One leaderboard row of a tournament's results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentResultItem {
    pub user_id: u64,
    pub rank_no: i32,
    pub score: i32,
    pub nickname: String,
    pub avatar_url: String,
}

/// Response of `GET /api/tournaments/{id}/results`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentResults {
    pub items: Vec<TournamentResultItem>,
    /// The caller's own row, when they participated.
    pub my: Option<TournamentResultItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_tournament_flattens_base_fields() {
        let joined: JoinedTournament = serde_json::from_str(
            r#"{"id": 9, "title": "夏季赛", "status": "PUBLISHED", "joinStatus": "JOINED"}"#,
        )
        .unwrap();
        assert_eq!(joined.tournament.id, 9);
        assert_eq!(joined.join_status, "JOINED");
    }

    #[test]
    fn test_results_without_my_entry() {
        let results: TournamentResults =
            serde_json::from_str(r#"{"items": [{"userId": 1, "rankNo": 1, "score": 98}]}"#).unwrap();
        assert_eq!(results.items.len(), 1);
        assert!(results.my.is_none());
    }
}
