pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::sections::requests::{
    CreateSectionRequest, SectionListQuery, UpdateSectionRequest,
};
use crate::storage::Storage;

pub struct SectionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SectionService {
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

    /// 创建班级
    pub async fn create_section(
        &self,
        request: &HttpRequest,
        req: CreateSectionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_section(self, request, req).await
    }

    /// 获取班级详情
    pub async fn get_section(
        &self,
        request: &HttpRequest,
        section_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_section(self, request, section_id).await
    }

    /// 列出班级（按角色过滤）
    pub async fn list_sections(
        &self,
        request: &HttpRequest,
        query: SectionListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_sections(self, request, query).await
    }

    /// 更新班级
    pub async fn update_section(
        &self,
        request: &HttpRequest,
        section_id: i64,
        req: UpdateSectionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_section(self, request, section_id, req).await
    }

    /// 删除班级
    pub async fn delete_section(
        &self,
        request: &HttpRequest,
        section_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_section(self, request, section_id).await
    }
}
