//! 认证授权中间件
//!
//! - `RequireJWT`: 验证 access token 并把用户写入请求扩展
//! - `RequireRole`: 路由级角色门禁（须在 RequireJWT 之后）
//! - `RateLimit`: 基于 IP/用户的速率限制
//!
//! 资源级的"管理员或所有者"判断不在中间件做，统一走 `services::access`。

mod rate_limit;
mod require_jwt;
mod require_role;

pub use rate_limit::RateLimit;
pub use require_jwt::RequireJWT;
pub use require_role::RequireRole;

use actix_web::{HttpResponse, http::StatusCode, http::header::CONTENT_TYPE};

use crate::models::{ApiResponse, ErrorCode};

/// 辅助函数：创建统一信封格式的错误响应
pub(crate) fn create_error_response(
    status: StatusCode,
    code: ErrorCode,
    message: &str,
) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::<()>::error_empty(code, message)),
    }
}
