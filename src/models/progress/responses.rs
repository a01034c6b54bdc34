use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::roster::entities::Student;
use crate::models::submissions::entities::Submission;

/// 进度统计
///
/// avg_score 保留两位小数（四舍五入，far-from-zero），graded 为 0 时为 None。
/// graded <= submitted 不成立是合法状态：评分可能先于 submitted_at 落库。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct ProgressMetrics {
    pub submitted: i64,
    pub graded: i64,
    pub avg_score: Option<f64>,
}

/// 进度列表项：名册学生 + 其最新提交（可能为空）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct ProgressEntry {
    pub student: Student,
    pub display_name: String,
    pub latest_submission: Option<Submission>,
}

/// 作业进度响应
///
/// entries 按最新提交时间倒序（无提交的学生排在最后）。
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct AssignmentProgressResponse {
    pub assignment_id: i64,
    pub total_students: i64,
    pub metrics: ProgressMetrics,
    pub entries: Vec<ProgressEntry>,
    pub not_submitted: Vec<Student>,
}

/// 下一份待评分提交响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct NextUngradedResponse {
    /// 按当前展示顺序的下一份未评分提交；没有则为 None
    pub submission_id: Option<i64>,
}
