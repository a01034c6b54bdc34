pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::roster::requests::{CreateStudentRequest, RosterQuery, UpdateStudentRequest};
use crate::storage::Storage;

pub struct RosterService {
    storage: Option<Arc<dyn Storage>>,
}

impl RosterService {
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

    /// 添加名册学生
    pub async fn add_student(
        &self,
        request: &HttpRequest,
        section_id: i64,
        req: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        manage::add_student(self, request, section_id, req).await
    }

    /// 列出班级名册
    pub async fn list_students(
        &self,
        request: &HttpRequest,
        section_id: i64,
        query: RosterQuery,
    ) -> ActixResult<HttpResponse> {
        manage::list_students(self, request, section_id, query).await
    }

    /// 更新名册学生
    pub async fn update_student(
        &self,
        request: &HttpRequest,
        section_id: i64,
        student_id: i64,
        req: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_student(self, request, section_id, student_id, req).await
    }

    /// 移除名册学生
    pub async fn remove_student(
        &self,
        request: &HttpRequest,
        section_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        manage::remove_student(self, request, section_id, student_id).await
    }
}
