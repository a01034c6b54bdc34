pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::quarters::requests::{
    CreateQuarterRequest, QuarterListQuery, UpdateQuarterRequest,
};
use crate::storage::Storage;

pub struct QuarterService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuarterService {
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

    /// 创建学期
    pub async fn create_quarter(
        &self,
        request: &HttpRequest,
        req: CreateQuarterRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_quarter(self, request, req).await
    }

    /// 列出学期
    pub async fn list_quarters(
        &self,
        request: &HttpRequest,
        query: QuarterListQuery,
    ) -> ActixResult<HttpResponse> {
        manage::list_quarters(self, request, query).await
    }

    /// 更新学期
    pub async fn update_quarter(
        &self,
        request: &HttpRequest,
        quarter_id: i64,
        req: UpdateQuarterRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_quarter(self, request, quarter_id, req).await
    }

    /// 删除学期
    pub async fn delete_quarter(
        &self,
        request: &HttpRequest,
        quarter_id: i64,
    ) -> ActixResult<HttpResponse> {
        manage::delete_quarter(self, request, quarter_id).await
    }
}
