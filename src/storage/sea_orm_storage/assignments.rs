//! 作业存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{LmsError, Result};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{AssignmentCreator, AssignmentListItem, AssignmentListResponse},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        section_id: i64,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            section_id: Set(section_id),
            quarter_id: Set(req.quarter_id),
            title: Set(req.title),
            instructions: Set(req.instructions),
            max_score: Set(req.max_score.unwrap_or(100.0)),
            due_at: Set(req.due_at.map(|dt| dt.timestamp())),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出班级作业
    pub async fn list_assignments_with_pagination_impl(
        &self,
        section_id: i64,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assignments::find().filter(Column::SectionId.eq(section_id));

        // 学期筛选
        if let Some(quarter_id) = query.quarter_id {
            select = select.filter(Column::QuarterId.eq(quarter_id));
        }

        // 搜索条件（按标题搜索）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业页数失败: {e}")))?;

        let assignments: Vec<Assignment> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_assignment())
            .collect();

        // 收集所有 created_by ID 并去重
        let creator_ids: Vec<i64> = assignments
            .iter()
            .map(|a| a.created_by)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        // 查询创建者信息
        let mut creator_map: HashMap<i64, AssignmentCreator> = HashMap::new();
        for creator_id in creator_ids {
            if let Ok(Some(user)) = self.get_user_by_id_impl(creator_id).await {
                creator_map.insert(
                    creator_id,
                    AssignmentCreator {
                        id: user.id,
                        username: user.username,
                        profile_name: Some(user.profile.profile_name),
                    },
                );
            }
        }

        let items: Vec<AssignmentListItem> = assignments
            .into_iter()
            .map(|assignment| {
                let creator = creator_map.get(&assignment.created_by).cloned();
                AssignmentListItem {
                    assignment,
                    creator,
                }
            })
            .collect();

        Ok(AssignmentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新作业
    pub async fn update_assignment_impl(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let existing = self.get_assignment_by_id_impl(assignment_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(assignment_id),
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

        if let Some(max_score) = update.max_score {
            model.max_score = Set(max_score);
        }

        if let Some(due_at) = update.due_at {
            model.due_at = Set(Some(due_at.timestamp()));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新作业失败: {e}")))?;

        self.get_assignment_by_id_impl(assignment_id).await
    }

    /// 删除作业
    pub async fn delete_assignment_impl(&self, assignment_id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(assignment_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
