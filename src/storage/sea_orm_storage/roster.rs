//! 名册存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{LmsError, Result};
use crate::models::roster::{
    entities::Student,
    requests::{CreateStudentRequest, RosterQuery, UpdateStudentRequest},
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 添加名册学生
    pub async fn add_student_impl(
        &self,
        section_id: i64,
        req: CreateStudentRequest,
    ) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            section_id: Set(section_id),
            user_id: Set(req.user_id),
            first_name: Set(req.first_name),
            middle_name: Set(req.middle_name),
            last_name: Set(req.last_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("添加名册学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取名册学生
    pub async fn get_student_by_id_impl(&self, student_id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询名册学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出班级名册（姓氏排序，整班返回）
    pub async fn list_section_students_impl(
        &self,
        section_id: i64,
        query: RosterQuery,
    ) -> Result<Vec<Student>> {
        let mut select = Students::find().filter(Column::SectionId.eq(section_id));

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FirstName.contains(&escaped))
                    .add(Column::MiddleName.contains(&escaped))
                    .add(Column::LastName.contains(&escaped)),
            );
        }

        let students = select
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询班级名册失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 更新名册学生
    pub async fn update_student_impl(
        &self,
        section_id: i64,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先确认该学生在此班级
        let existing = Students::find_by_id(student_id)
            .filter(Column::SectionId.eq(section_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询名册学生失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(student_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }

        if let Some(middle_name) = update.middle_name {
            model.middle_name = Set(Some(middle_name));
        }

        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }

        if let Some(user_id) = update.user_id {
            model.user_id = Set(Some(user_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新名册学生失败: {e}")))?;

        self.get_student_by_id_impl(student_id).await
    }

    /// 移除名册学生
    pub async fn remove_student_impl(&self, section_id: i64, student_id: i64) -> Result<bool> {
        let result = Students::delete_many()
            .filter(Column::Id.eq(student_id))
            .filter(Column::SectionId.eq(section_id))
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("移除名册学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按登录账号查名册行
    pub async fn get_student_by_user_and_section_impl(
        &self,
        user_id: i64,
        section_id: i64,
    ) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::SectionId.eq(section_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询名册学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }
}
