use serde::Serialize;
use ts_rs::TS;

use super::entities::Quiz;

/// 测验列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizListResponse {
    pub items: Vec<Quiz>,
}
