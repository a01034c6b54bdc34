use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::submissions::requests::{
    CreateSubmissionRequest, GradeSubmissionRequest, SubmissionListQuery,
};
use crate::models::users::entities::UserRole;
use crate::services::SubmissionService;
use crate::utils::{SafeAssignmentIdI64, SafeIDI64, SafeStudentIdI64};

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 创建提交
pub async fn create_submission(
    req: HttpRequest,
    body: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .create_submission(&req, body.into_inner())
        .await
}

// 获取提交详情
pub async fn get_submission(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.get_submission(&req, path.0).await
}

// 列出提交
pub async fn list_submissions(
    req: HttpRequest,
    query: web::Query<SubmissionListQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, query.into_inner())
        .await
}

// 写入评分
pub async fn grade_submission(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, path.0, body.into_inner())
        .await
}

// 获取我的提交历史
pub async fn list_my_submissions(
    req: HttpRequest,
    path: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.list_my_submissions(&req, path.0).await
}

// 获取某学生某作业的全部尝试（教师视角）
pub async fn list_student_submissions(
    req: HttpRequest,
    assignment: SafeAssignmentIdI64,
    student: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_student_submissions(&req, assignment.0, student.0)
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出提交 - 仅教师和管理员（所有权在业务层校验）
                    .route(
                        web::get()
                            .to(list_submissions)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    // 创建提交 - 学生，限流
                    .route(
                        web::post()
                            .to(create_submission)
                            .wrap(RateLimit::submission()),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 详情 - 管理员/教师/提交人本人（业务层校验）
                    .route(web::get().to(get_submission)),
            )
            .service(
                web::resource("/{id}/grade")
                    // 评分 - 仅教师和管理员（所有权在业务层校验）
                    .route(
                        web::put()
                            .to(grade_submission)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );

    // 作业相关的提交路由
    cfg.service(
        web::scope("/api/v1/assignments/{assignment_id}/submissions")
            .wrap(middlewares::RequireJWT)
            .route("/my", web::get().to(list_my_submissions))
            .route(
                "/user/{student_id}",
                web::get().to(list_student_submissions),
            ),
    );
}
