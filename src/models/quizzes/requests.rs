use serde::Deserialize;
use ts_rs::TS;

use super::entities::QuizQuestion;

/// 创建测验请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct CreateQuizRequest {
    pub quarter_id: i64,
    pub title: String,
    pub instructions: Option<String>,
    pub questions: Vec<QuizQuestion>,
    pub max_score: Option<f64>,
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
    pub time_limit_minutes: Option<i32>,
}

/// 更新测验请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct UpdateQuizRequest {
    pub quarter_id: Option<i64>,
    pub title: Option<String>,
    pub instructions: Option<String>,
    pub questions: Option<Vec<QuizQuestion>>,
    pub max_score: Option<f64>,
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
    pub time_limit_minutes: Option<i32>,
}

/// 测验列表查询
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizListQuery {
    pub quarter_id: Option<i64>,
    pub search: Option<String>,
}
