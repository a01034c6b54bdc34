use serde::Serialize;
use ts_rs::TS;

use super::entities::Submission;
use crate::models::PaginationInfo;

/// 提交列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListResponse {
    pub items: Vec<Submission>,
    pub pagination: PaginationInfo,
}

/// 学生提交历史（单个作业的全部尝试，无分页）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionHistoryResponse {
    pub assignment_id: i64,
    pub student_id: i64,
    pub items: Vec<Submission>,
}

/// 评分写入确认响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeUpdateResponse {
    pub id: i64,
    pub grade: Option<f64>,
    pub feedback: Option<String>,
}
