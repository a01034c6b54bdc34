//! 学期存储操作

use super::SeaOrmStorage;
use crate::entity::quarters::{ActiveModel, Column, Entity as Quarters};
use crate::errors::{LmsError, Result};
use crate::models::quarters::{
    entities::Quarter,
    requests::{CreateQuarterRequest, QuarterListQuery, UpdateQuarterRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学期
    pub async fn create_quarter_impl(&self, req: CreateQuarterRequest) -> Result<Quarter> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            school_year: Set(req.school_year),
            starts_on: Set(req.starts_on.map(|dt| dt.timestamp())),
            ends_on: Set(req.ends_on.map(|dt| dt.timestamp())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建学期失败: {e}")))?;

        Ok(result.into_quarter())
    }

    /// 通过 ID 获取学期
    pub async fn get_quarter_by_id_impl(&self, quarter_id: i64) -> Result<Option<Quarter>> {
        let result = Quarters::find_by_id(quarter_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学期失败: {e}")))?;

        Ok(result.map(|m| m.into_quarter()))
    }

    /// 列出学期（按开始时间排序）
    pub async fn list_quarters_impl(&self, query: QuarterListQuery) -> Result<Vec<Quarter>> {
        let mut select = Quarters::find();

        if let Some(ref school_year) = query.school_year {
            select = select.filter(Column::SchoolYear.eq(school_year.clone()));
        }

        let quarters = select
            .order_by_asc(Column::StartsOn)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学期列表失败: {e}")))?;

        Ok(quarters.into_iter().map(|m| m.into_quarter()).collect())
    }

    /// 更新学期
    pub async fn update_quarter_impl(
        &self,
        quarter_id: i64,
        update: UpdateQuarterRequest,
    ) -> Result<Option<Quarter>> {
        let existing = self.get_quarter_by_id_impl(quarter_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(quarter_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(school_year) = update.school_year {
            model.school_year = Set(school_year);
        }

        if let Some(starts_on) = update.starts_on {
            model.starts_on = Set(Some(starts_on.timestamp()));
        }

        if let Some(ends_on) = update.ends_on {
            model.ends_on = Set(Some(ends_on.timestamp()));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新学期失败: {e}")))?;

        self.get_quarter_by_id_impl(quarter_id).await
    }

    /// 删除学期
    pub async fn delete_quarter_impl(&self, quarter_id: i64) -> Result<bool> {
        let result = Quarters::delete_by_id(quarter_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除学期失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
