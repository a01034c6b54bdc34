use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 提交实体
///
/// 同一 (assignment, student) 可有多次尝试（attempt 递增）。
/// submitted_at 可为空；grade/feedback 仅由评分操作写入。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub attempt: i32,
    pub answer_text: Option<String>,
    pub file_url: Option<String>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub grade: Option<f64>,
    pub feedback: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
