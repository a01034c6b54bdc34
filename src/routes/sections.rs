use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::roster::requests::{CreateStudentRequest, RosterQuery, UpdateStudentRequest};
use crate::models::sections::requests::{
    CreateSectionRequest, SectionListQuery, UpdateSectionRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{RosterService, SectionService};
use crate::utils::{SafeIDI64, SafeSectionIdI64, SafeStudentIdI64};

// 懒加载的全局服务实例
static SECTION_SERVICE: Lazy<SectionService> = Lazy::new(SectionService::new_lazy);
static ROSTER_SERVICE: Lazy<RosterService> = Lazy::new(RosterService::new_lazy);

// 创建班级
pub async fn create_section(
    req: HttpRequest,
    body: web::Json<CreateSectionRequest>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE
        .create_section(&req, body.into_inner())
        .await
}

// 获取班级详情
pub async fn get_section(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.get_section(&req, path.0).await
}

// 列出班级
pub async fn list_sections(
    req: HttpRequest,
    query: web::Query<SectionListQuery>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE
        .list_sections(&req, query.into_inner())
        .await
}

// 更新班级
pub async fn update_section(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateSectionRequest>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE
        .update_section(&req, path.0, body.into_inner())
        .await
}

// 删除班级
pub async fn delete_section(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.delete_section(&req, path.0).await
}

// 添加名册学生
pub async fn add_student(
    req: HttpRequest,
    path: SafeSectionIdI64,
    body: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE
        .add_student(&req, path.0, body.into_inner())
        .await
}

// 列出班级名册
pub async fn list_students(
    req: HttpRequest,
    path: SafeSectionIdI64,
    query: web::Query<RosterQuery>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE
        .list_students(&req, path.0, query.into_inner())
        .await
}

// 更新名册学生
pub async fn update_student(
    req: HttpRequest,
    section: SafeSectionIdI64,
    student: SafeStudentIdI64,
    body: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE
        .update_student(&req, section.0, student.0, body.into_inner())
        .await
}

// 移除名册学生
pub async fn remove_student(
    req: HttpRequest,
    section: SafeSectionIdI64,
    student: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE.remove_student(&req, section.0, student.0).await
}

// 配置路由
pub fn configure_sections_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/sections")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出班级 - 业务层按角色过滤
                    .route(web::get().to(list_sections))
                    // 创建班级 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_section)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 详情 - 班级成员（业务层校验）
                    .route(web::get().to(get_section))
                    // 更新/删除 - 仅教师和管理员（所有权在业务层校验）
                    .route(
                        web::put()
                            .to(update_section)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_section)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{section_id}/students")
                    // 名册读取 - 班级成员；写 - 仅教师和管理员
                    .route(web::get().to(list_students))
                    .route(
                        web::post()
                            .to(add_student)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{section_id}/students/{student_id}")
                    .route(
                        web::put()
                            .to(update_student)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(remove_student)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
