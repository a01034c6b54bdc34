//! 测验存储操作

use super::SeaOrmStorage;
use crate::entity::quizzes::{ActiveModel, Column, Entity as Quizzes};
use crate::errors::{LmsError, Result};
use crate::models::quizzes::{
    entities::Quiz,
    requests::{CreateQuizRequest, QuizListQuery, UpdateQuizRequest},
};
use crate::utils::escape_like_pattern;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建测验
    pub async fn create_quiz_impl(
        &self,
        section_id: i64,
        created_by: i64,
        req: CreateQuizRequest,
    ) -> Result<Quiz> {
        let now = chrono::Utc::now().timestamp();

        // 未显式给出满分时按题目分值合计
        let max_score = req
            .max_score
            .unwrap_or_else(|| req.questions.iter().map(|q| q.points).sum());

        let questions = serde_json::to_string(&req.questions)
            .map_err(|e| LmsError::serialization(format!("题目序列化失败: {e}")))?;

        let model = ActiveModel {
            section_id: Set(section_id),
            quarter_id: Set(req.quarter_id),
            title: Set(req.title),
            instructions: Set(req.instructions),
            questions: Set(questions),
            max_score: Set(max_score),
            due_at: Set(req.due_at.map(|dt| dt.timestamp())),
            time_limit_minutes: Set(req.time_limit_minutes),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建测验失败: {e}")))?;

        Ok(result.into_quiz())
    }

    /// 通过 ID 获取测验
    pub async fn get_quiz_by_id_impl(&self, quiz_id: i64) -> Result<Option<Quiz>> {
        let result = Quizzes::find_by_id(quiz_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验失败: {e}")))?;

        Ok(result.map(|m| m.into_quiz()))
    }

    /// 列出班级测验
    pub async fn list_section_quizzes_impl(
        &self,
        section_id: i64,
        query: QuizListQuery,
    ) -> Result<Vec<Quiz>> {
        let mut select = Quizzes::find().filter(Column::SectionId.eq(section_id));

        if let Some(quarter_id) = query.quarter_id {
            select = select.filter(Column::QuarterId.eq(quarter_id));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        let quizzes = select
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(quizzes.into_iter().map(|m| m.into_quiz()).collect())
    }

    /// 更新测验
    pub async fn update_quiz_impl(
        &self,
        quiz_id: i64,
        update: UpdateQuizRequest,
    ) -> Result<Option<Quiz>> {
        let existing = self.get_quiz_by_id_impl(quiz_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(quiz_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(quarter_id) = update.quarter_id {
            model.quarter_id = Set(quarter_id);
        }

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(instructions) = update.instructions {
            model.instructions = Set(Some(instructions));
        }

        if let Some(questions) = update.questions {
            let serialized = serde_json::to_string(&questions)
                .map_err(|e| LmsError::serialization(format!("题目序列化失败: {e}")))?;
            model.questions = Set(serialized);
        }

        if let Some(max_score) = update.max_score {
            model.max_score = Set(max_score);
        }

        if let Some(due_at) = update.due_at {
            model.due_at = Set(Some(due_at.timestamp()));
        }

        if let Some(time_limit) = update.time_limit_minutes {
            model.time_limit_minutes = Set(Some(time_limit));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新测验失败: {e}")))?;

        self.get_quiz_by_id_impl(quiz_id).await
    }

    /// 删除测验
    pub async fn delete_quiz_impl(&self, quiz_id: i64) -> Result<bool> {
        let result = Quizzes::delete_by_id(quiz_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除测验失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
