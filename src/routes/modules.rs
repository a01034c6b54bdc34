use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::modules::requests::{CreateModuleRequest, ModuleListQuery, UpdateModuleRequest};
use crate::models::users::entities::UserRole;
use crate::services::ModuleService;
use crate::utils::{SafeIDI64, SafeSectionIdI64};

// 懒加载的全局 ModuleService 实例
static MODULE_SERVICE: Lazy<ModuleService> = Lazy::new(ModuleService::new_lazy);

// 创建模块
pub async fn create_module(
    req: HttpRequest,
    path: SafeSectionIdI64,
    body: web::Json<CreateModuleRequest>,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .create_module(&req, path.0, body.into_inner())
        .await
}

// 获取模块详情
pub async fn get_module(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    MODULE_SERVICE.get_module(&req, path.0).await
}

// 列出班级模块
pub async fn list_modules(
    req: HttpRequest,
    path: SafeSectionIdI64,
    query: web::Query<ModuleListQuery>,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .list_modules(&req, path.0, query.into_inner())
        .await
}

// 更新模块
pub async fn update_module(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateModuleRequest>,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .update_module(&req, path.0, body.into_inner())
        .await
}

// 删除模块
pub async fn delete_module(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    MODULE_SERVICE.delete_module(&req, path.0).await
}

// 配置路由
pub fn configure_modules_routes(cfg: &mut web::ServiceConfig) {
    // 班级下的模块集合
    cfg.service(
        web::scope("/api/v1/sections/{section_id}/modules")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列表 - 班级成员（业务层校验）
                    .route(web::get().to(list_modules))
                    // 创建 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_module)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );

    // 单个模块
    cfg.service(
        web::scope("/api/v1/modules")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_module))
                    .route(
                        web::put()
                            .to(update_module)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_module)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
