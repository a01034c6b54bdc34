use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::quarters::requests::{
    CreateQuarterRequest, QuarterListQuery, UpdateQuarterRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::QuarterService;
use crate::utils::SafeIDI64;

// 懒加载的全局 QuarterService 实例
static QUARTER_SERVICE: Lazy<QuarterService> = Lazy::new(QuarterService::new_lazy);

// 创建学期
pub async fn create_quarter(
    req: HttpRequest,
    body: web::Json<CreateQuarterRequest>,
) -> ActixResult<HttpResponse> {
    QUARTER_SERVICE
        .create_quarter(&req, body.into_inner())
        .await
}

// 列出学期
pub async fn list_quarters(
    req: HttpRequest,
    query: web::Query<QuarterListQuery>,
) -> ActixResult<HttpResponse> {
    QUARTER_SERVICE
        .list_quarters(&req, query.into_inner())
        .await
}

// 更新学期
pub async fn update_quarter(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateQuarterRequest>,
) -> ActixResult<HttpResponse> {
    QUARTER_SERVICE
        .update_quarter(&req, path.0, body.into_inner())
        .await
}

// 删除学期
pub async fn delete_quarter(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    QUARTER_SERVICE.delete_quarter(&req, path.0).await
}

// 配置路由
pub fn configure_quarters_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/quarters")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出学期 - 所有登录用户
                    .route(web::get().to(list_quarters))
                    // 创建学期 - 仅管理员
                    .route(
                        web::post()
                            .to(create_quarter)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::put()
                            .to(update_quarter)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_quarter)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
