use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 课程模块（按班级 + 学期组织的学习材料）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct Module {
    pub id: i64,
    pub section_id: i64,
    pub quarter_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
