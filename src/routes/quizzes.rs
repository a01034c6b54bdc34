use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::quizzes::requests::{CreateQuizRequest, QuizListQuery, UpdateQuizRequest};
use crate::models::users::entities::UserRole;
use crate::services::QuizService;
use crate::utils::{SafeIDI64, SafeSectionIdI64};

// 懒加载的全局 QuizService 实例
static QUIZ_SERVICE: Lazy<QuizService> = Lazy::new(QuizService::new_lazy);

// 创建测验
pub async fn create_quiz(
    req: HttpRequest,
    path: SafeSectionIdI64,
    body: web::Json<CreateQuizRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .create_quiz(&req, path.0, body.into_inner())
        .await
}

// 获取测验详情
pub async fn get_quiz(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.get_quiz(&req, path.0).await
}

// 列出班级测验
pub async fn list_quizzes(
    req: HttpRequest,
    path: SafeSectionIdI64,
    query: web::Query<QuizListQuery>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .list_quizzes(&req, path.0, query.into_inner())
        .await
}

// 更新测验
pub async fn update_quiz(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateQuizRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .update_quiz(&req, path.0, body.into_inner())
        .await
}

// 删除测验
pub async fn delete_quiz(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.delete_quiz(&req, path.0).await
}

// 配置路由
pub fn configure_quizzes_routes(cfg: &mut web::ServiceConfig) {
    // 班级下的测验集合
    cfg.service(
        web::scope("/api/v1/sections/{section_id}/quizzes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_quizzes))
                    .route(
                        web::post()
                            .to(create_quiz)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );

    // 单个测验
    cfg.service(
        web::scope("/api/v1/quizzes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_quiz))
                    .route(
                        web::put()
                            .to(update_quiz)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_quiz)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
