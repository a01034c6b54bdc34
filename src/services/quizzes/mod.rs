pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::quizzes::requests::{CreateQuizRequest, QuizListQuery, UpdateQuizRequest};
use crate::storage::Storage;

pub struct QuizService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuizService {
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

    /// 创建测验
    pub async fn create_quiz(
        &self,
        request: &HttpRequest,
        section_id: i64,
        req: CreateQuizRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_quiz(self, request, section_id, req).await
    }

    /// 获取测验详情
    pub async fn get_quiz(&self, request: &HttpRequest, quiz_id: i64) -> ActixResult<HttpResponse> {
        manage::get_quiz(self, request, quiz_id).await
    }

    /// 列出班级测验
    pub async fn list_quizzes(
        &self,
        request: &HttpRequest,
        section_id: i64,
        query: QuizListQuery,
    ) -> ActixResult<HttpResponse> {
        manage::list_quizzes(self, request, section_id, query).await
    }

    /// 更新测验
    pub async fn update_quiz(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
        req: UpdateQuizRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_quiz(self, request, quiz_id, req).await
    }

    /// 删除测验
    pub async fn delete_quiz(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
    ) -> ActixResult<HttpResponse> {
        manage::delete_quiz(self, request, quiz_id).await
    }
}
