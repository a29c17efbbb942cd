//! Task definition payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A task definition (`/api/tasks`, `/admin/task-defs`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskDef {
    pub id: u64,
    pub task_code: String,
    pub name: String,
    /// DAILY / WEEKLY / ONCE as defined by the backend.
    pub period_type: String,
    pub target_count: i32,
    pub reward_points: i64,
    pub status: i32,
    /// Opaque rule payload owned by the backend.
    pub rule_json: Option<Value>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Create/update payload for the admin task-def endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskDefInput {
    pub task_code: String,
    pub name: String,
    pub period_type: String,
    pub target_count: i32,
    pub reward_points: i64,
    pub status: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_json: Option<Value>,
}
