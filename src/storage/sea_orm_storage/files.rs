//! 文件存储操作

use super::SeaOrmStorage;
use crate::entity::files::{ActiveModel, Column, Entity as Files};
use crate::errors::{LmsError, Result};
use crate::models::files::entities::File;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 登记上传文件
    pub async fn create_file_impl(
        &self,
        token: &str,
        file_name: &str,
        file_size: i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            token: Set(token.to_string()),
            file_name: Set(file_name.to_string()),
            file_size: Set(file_size),
            file_type: Set(file_type.to_string()),
            uploaded_at: Set(now),
            citation_count: Set(Some(0)),
            user_id: Set(user_id),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("登记文件失败: {e}")))?;

        Ok(result.into_file())
    }

    /// 通过唯一 token 获取文件信息
    pub async fn get_file_by_token_impl(&self, token: &str) -> Result<Option<File>> {
        let result = Files::find()
            .filter(Column::Token.eq(token))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询文件失败: {e}")))?;

        Ok(result.map(|m| m.into_file()))
    }

    /// 增加文件引用计数
    pub async fn increment_file_citation_impl(&self, token: &str) -> Result<()> {
        let existing = Files::find()
            .filter(Column::Token.eq(token))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询文件失败: {e}")))?;

        let Some(file) = existing else {
            return Err(LmsError::not_found(format!("文件不存在: {token}")));
        };

        let model = ActiveModel {
            token: Set(file.token),
            citation_count: Set(Some(file.citation_count.unwrap_or(0) + 1)),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新引用计数失败: {e}")))?;

        Ok(())
    }
}
