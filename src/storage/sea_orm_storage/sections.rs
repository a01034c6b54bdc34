//! 班级存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::sections::{ActiveModel, Column, Entity as Sections};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{LmsError, Result};
use crate::models::{
    PaginationInfo,
    sections::{
        entities::Section,
        requests::{CreateSectionRequest, SectionListQuery, UpdateSectionRequest},
        responses::{SectionListItem, SectionListResponse, SectionTeacher},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_section_impl(
        &self,
        teacher_id: i64,
        req: CreateSectionRequest,
    ) -> Result<Section> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            name: Set(req.name),
            grade_level: Set(req.grade_level),
            description: Set(req.description),
            school_year: Set(req.school_year),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_section())
    }

    /// 通过 ID 获取班级
    pub async fn get_section_by_id_impl(&self, section_id: i64) -> Result<Option<Section>> {
        let result = Sections::find_by_id(section_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_section()))
    }

    /// 分页列出班级
    pub async fn list_sections_with_pagination_impl(
        &self,
        query: SectionListQuery,
    ) -> Result<SectionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Sections::find();

        // 教师筛选
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        // 学年筛选
        if let Some(ref school_year) = query.school_year {
            select = select.filter(Column::SchoolYear.eq(school_year.clone()));
        }

        // 搜索条件（按名称搜索）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::GradeLevel.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询班级总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询班级页数失败: {e}")))?;

        let sections: Vec<Section> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询班级列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_section())
            .collect();

        // 收集教师 ID 并去重
        let teacher_ids: Vec<i64> = sections
            .iter()
            .map(|s| s.teacher_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        // 查询教师信息
        let mut teacher_map: HashMap<i64, SectionTeacher> = HashMap::new();
        for teacher_id in teacher_ids {
            if let Ok(Some(user)) = self.get_user_by_id_impl(teacher_id).await {
                teacher_map.insert(
                    teacher_id,
                    SectionTeacher {
                        id: user.id,
                        username: user.username,
                        profile_name: Some(user.profile.profile_name),
                    },
                );
            }
        }

        // 查询每个班级的学生数
        let mut items: Vec<SectionListItem> = Vec::with_capacity(sections.len());
        for section in sections {
            let student_count = Students::find()
                .filter(StudentColumn::SectionId.eq(section.id))
                .count(&self.db)
                .await
                .map_err(|e| {
                    LmsError::database_operation(format!("查询班级学生数失败: {e}"))
                })? as i64;

            let teacher = teacher_map.get(&section.teacher_id).cloned();
            items.push(SectionListItem {
                section,
                teacher,
                student_count,
            });
        }

        Ok(SectionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新班级
    pub async fn update_section_impl(
        &self,
        section_id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<Section>> {
        let existing = self.get_section_by_id_impl(section_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(section_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(grade_level) = update.grade_level {
            model.grade_level = Set(Some(grade_level));
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(school_year) = update.school_year {
            model.school_year = Set(school_year);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_section_by_id_impl(section_id).await
    }

    /// 删除班级
    pub async fn delete_section_impl(&self, section_id: i64) -> Result<bool> {
        let result = Sections::delete_by_id(section_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出某登录账号作为名册学生所在的班级 ID
    pub async fn list_section_ids_for_user_impl(&self, user_id: i64) -> Result<Vec<i64>> {
        let students = Students::find()
            .filter(StudentColumn::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学生名册失败: {e}")))?;

        Ok(students.into_iter().map(|s| s.section_id).collect())
    }
}
