pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::modules::requests::{CreateModuleRequest, ModuleListQuery, UpdateModuleRequest};
use crate::storage::Storage;

pub struct ModuleService {
    storage: Option<Arc<dyn Storage>>,
}

impl ModuleService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 创建模块
    pub async fn create_module(
        &self,
        request: &HttpRequest,
        section_id: i64,
        req: CreateModuleRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_module(self, request, section_id, req).await
    }

    /// 获取模块详情（含附件）
    pub async fn get_module(
        &self,
        request: &HttpRequest,
        module_id: i64,
    ) -> ActixResult<HttpResponse> {
        manage::get_module(self, request, module_id).await
    }

    /// 列出班级模块
    pub async fn list_modules(
        &self,
        request: &HttpRequest,
        section_id: i64,
        query: ModuleListQuery,
    ) -> ActixResult<HttpResponse> {
        manage::list_modules(self, request, section_id, query).await
    }

    /// 更新模块
    pub async fn update_module(
        &self,
        request: &HttpRequest,
        module_id: i64,
        req: UpdateModuleRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_module(self, request, module_id, req).await
    }

    /// 删除模块
    pub async fn delete_module(
        &self,
        request: &HttpRequest,
        module_id: i64,
    ) -> ActixResult<HttpResponse> {
        manage::delete_module(self, request, module_id).await
    }
}
