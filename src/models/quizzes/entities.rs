use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 测验题目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// 正确选项下标；发给学生的视图会剥离此字段
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<u32>,
    pub points: f64,
}

/// 测验实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct Quiz {
    pub id: i64,
    pub section_id: i64,
    pub quarter_id: i64,
    pub title: String,
    pub instructions: Option<String>,
    pub questions: Vec<QuizQuestion>,
    pub max_score: f64,
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
    pub time_limit_minutes: Option<i32>,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Quiz {
    /// 学生视图：剥离正确答案
    pub fn redact_answers(mut self) -> Self {
        for question in &mut self.questions {
            question.answer = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_answers() {
        let quiz = Quiz {
            id: 1,
            section_id: 1,
            quarter_id: 1,
            title: "Unit test quiz".to_string(),
            instructions: None,
            questions: vec![QuizQuestion {
                prompt: "1 + 1 = ?".to_string(),
                options: vec!["1".to_string(), "2".to_string()],
                answer: Some(1),
                points: 1.0,
            }],
            max_score: 1.0,
            due_at: None,
            time_limit_minutes: None,
            created_by: 1,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let redacted = quiz.redact_answers();
        assert!(redacted.questions.iter().all(|q| q.answer.is_none()));
    }
}
