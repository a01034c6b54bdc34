use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::{
    AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{AssignmentService, ProgressService};
use crate::utils::{SafeIDI64, SafeSectionIdI64};

// 懒加载的全局服务实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static PROGRESS_SERVICE: Lazy<ProgressService> = Lazy::new(ProgressService::new_lazy);

// 创建作业
pub async fn create_assignment(
    req: HttpRequest,
    path: SafeSectionIdI64,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, path.0, body.into_inner())
        .await
}

// 获取作业详情
pub async fn get_assignment(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(&req, path.0).await
}

// 列出班级作业
pub async fn list_assignments(
    req: HttpRequest,
    path: SafeSectionIdI64,
    query: web::Query<AssignmentListQuery>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, path.0, query.into_inner())
        .await
}

// 更新作业
pub async fn update_assignment(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .update_assignment(&req, path.0, body.into_inner())
        .await
}

// 删除作业
pub async fn delete_assignment(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.delete_assignment(&req, path.0).await
}

// 获取作业进度（名册 + 最新提交 + 统计）
pub async fn get_assignment_progress(
    req: HttpRequest,
    path: SafeIDI64,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE.get_assignment_progress(&req, path.0).await
}

/// 下一份待评分查询参数
#[derive(Debug, serde::Deserialize, ts_rs::TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct NextUngradedQuery {
    /// 当前正在批改的提交 id
    pub current: i64,
}

// 按展示顺序找下一份待评分提交
pub async fn get_next_ungraded(
    req: HttpRequest,
    path: SafeIDI64,
    query: web::Query<NextUngradedQuery>,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE
        .get_next_ungraded(&req, path.0, query.current)
        .await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    // 班级下的作业集合
    cfg.service(
        web::scope("/api/v1/sections/{section_id}/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列表 - 班级成员（业务层校验）
                    .route(web::get().to(list_assignments))
                    // 创建 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );

    // 单个作业与进度视图
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{id}")
                    // 详情 - 班级成员（业务层校验）
                    .route(web::get().to(get_assignment))
                    .route(
                        web::put()
                            .to(update_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 进度视图 - 仅教师和管理员（所有权在业务层校验）
            .service(
                web::resource("/{id}/progress")
                    .route(web::get().to(get_assignment_progress))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            )
            .service(
                web::resource("/{id}/progress/next-ungraded")
                    .route(web::get().to(get_next_ungraded))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            ),
    );
}
