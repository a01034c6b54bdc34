use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 作业实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: i64,
    pub section_id: i64,
    pub quarter_id: i64,
    pub title: String,
    pub instructions: Option<String>,
    pub max_score: f64,
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
