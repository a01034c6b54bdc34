use serde::Deserialize;
use ts_rs::TS;

/// 创建作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub quarter_id: i64,
    pub title: String,
    pub instructions: Option<String>,
    pub max_score: Option<f64>,
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// 更新作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub quarter_id: Option<i64>,
    pub title: Option<String>,
    pub instructions: Option<String>,
    pub max_score: Option<f64>,
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// 作业列表查询
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub quarter_id: Option<i64>,
    pub search: Option<String>,
}
