//! 课程模块存储操作

use super::SeaOrmStorage;
use crate::entity::module_files::{
    ActiveModel as ModuleFileActiveModel, Column as ModuleFileColumn, Entity as ModuleFiles,
};
use crate::entity::modules::{ActiveModel, Column, Entity as Modules};
use crate::errors::{LmsError, Result};
use crate::models::files::entities::File;
use crate::models::modules::{
    entities::Module,
    requests::{CreateModuleRequest, ModuleListQuery, UpdateModuleRequest},
};
use crate::utils::escape_like_pattern;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建模块
    pub async fn create_module_impl(
        &self,
        section_id: i64,
        req: CreateModuleRequest,
        user_id: i64,
    ) -> Result<Module> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            section_id: Set(section_id),
            quarter_id: Set(req.quarter_id),
            title: Set(req.title),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建模块失败: {e}")))?;

        // 处理附件
        if let Some(tokens) = req.attachments {
            self.set_module_files_impl(result.id, tokens, user_id)
                .await?;
        }

        Ok(result.into_module())
    }

    /// 通过 ID 获取模块
    pub async fn get_module_by_id_impl(&self, module_id: i64) -> Result<Option<Module>> {
        let result = Modules::find_by_id(module_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询模块失败: {e}")))?;

        Ok(result.map(|m| m.into_module()))
    }

    /// 列出班级的模块
    pub async fn list_section_modules_impl(
        &self,
        section_id: i64,
        query: ModuleListQuery,
    ) -> Result<Vec<Module>> {
        let mut select = Modules::find().filter(Column::SectionId.eq(section_id));

        if let Some(quarter_id) = query.quarter_id {
            select = select.filter(Column::QuarterId.eq(quarter_id));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        let modules = select
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询模块列表失败: {e}")))?;

        Ok(modules.into_iter().map(|m| m.into_module()).collect())
    }

    /// 更新模块
    pub async fn update_module_impl(
        &self,
        module_id: i64,
        update: UpdateModuleRequest,
        user_id: i64,
    ) -> Result<Option<Module>> {
        let existing = self.get_module_by_id_impl(module_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(module_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(quarter_id) = update.quarter_id {
            model.quarter_id = Set(quarter_id);
        }

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新模块失败: {e}")))?;

        // 处理附件
        if let Some(tokens) = update.attachments {
            self.set_module_files_impl(module_id, tokens, user_id)
                .await?;
        }

        self.get_module_by_id_impl(module_id).await
    }

    /// 删除模块
    pub async fn delete_module_impl(&self, module_id: i64) -> Result<bool> {
        // 先删除附件关联
        ModuleFiles::delete_many()
            .filter(ModuleFileColumn::ModuleId.eq(module_id))
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除模块附件关联失败: {e}")))?;

        let result = Modules::delete_by_id(module_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除模块失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 获取模块附件
    pub async fn get_module_files_impl(&self, module_id: i64) -> Result<Vec<File>> {
        let links = ModuleFiles::find()
            .filter(ModuleFileColumn::ModuleId.eq(module_id))
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询模块附件失败: {e}")))?;

        let mut files = Vec::with_capacity(links.len());
        for link in links {
            if let Some(file) = self.get_file_by_token_impl(&link.file_token).await? {
                files.push(file);
            }
        }

        Ok(files)
    }

    /// 设置模块附件（通过 token，带所有权校验）
    pub async fn set_module_files_impl(
        &self,
        module_id: i64,
        tokens: Vec<String>,
        user_id: i64,
    ) -> Result<()> {
        // 先删除旧的关联
        ModuleFiles::delete_many()
            .filter(ModuleFileColumn::ModuleId.eq(module_id))
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除旧附件关联失败: {e}")))?;

        // 通过 token 查找文件并校验所有权
        for token in tokens {
            let file = self
                .get_file_by_token_impl(&token)
                .await?
                .ok_or_else(|| LmsError::not_found(format!("文件不存在: {token}")))?;

            // 校验文件所有权
            if file.user_id != user_id {
                return Err(LmsError::authorization(format!("无权使用此文件: {token}")));
            }

            let model = ModuleFileActiveModel {
                module_id: Set(module_id),
                file_token: Set(file.token.clone()),
            };

            model
                .insert(&self.db)
                .await
                .map_err(|e| LmsError::database_operation(format!("创建附件关联失败: {e}")))?;

            // 增加文件引用计数
            self.increment_file_citation_impl(&file.token).await?;
        }

        Ok(())
    }
}
