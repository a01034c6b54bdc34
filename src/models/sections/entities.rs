use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 班级实体（教师所有）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct Section {
    pub id: i64,
    pub teacher_id: i64,
    pub name: String,
    pub grade_level: Option<String>,
    pub description: Option<String>,
    pub school_year: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
