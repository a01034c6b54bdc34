//! 令牌刷新与注销
//!
//! JWT 本身无状态，注销通过内存吊销表实现：注销时把 refresh token
//! 记入吊销表，刷新时先查表。吊销表按过期时间惰性清理。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use tracing::info;

use super::AuthService;
use crate::config::AppConfig;
use crate::models::auth::responses::RefreshTokenResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

/// 已吊销的 refresh token -> 原过期时间戳
static REVOKED_REFRESH_TOKENS: Lazy<DashMap<String, i64>> = Lazy::new(DashMap::new);

/// 清理已自然过期的吊销记录
fn prune_revoked() {
    let now = chrono::Utc::now().timestamp();
    REVOKED_REFRESH_TOKENS.retain(|_, expires_at| *expires_at > now);
}

fn is_revoked(token: &str) -> bool {
    prune_revoked();
    REVOKED_REFRESH_TOKENS.contains_key(token)
}

pub(super) fn revoke(token: &str, expires_at: i64) {
    prune_revoked();
    REVOKED_REFRESH_TOKENS.insert(token.to_string(), expires_at);
}

/// 刷新 access token
/// POST /auth/refresh
pub async fn refresh_token(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let refresh_token = match JwtUtils::extract_refresh_token_from_cookie(request) {
        Some(token) => token,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "缺少 refresh token",
            )));
        }
    };

    if is_revoked(&refresh_token) {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "refresh token 已失效",
        )));
    }

    match JwtUtils::refresh_access_token(&refresh_token) {
        Ok(access_token) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RefreshTokenResponse {
                access_token,
                expires_in: config.jwt.access_token_expiry * 60,
            },
            "刷新成功",
        ))),
        Err(e) => {
            info!("Refresh token validation failed: {}", e);
            Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "refresh token 无效或已过期",
            )))
        }
    }
}

/// 注销
/// POST /auth/logout
pub async fn logout(service: &AuthService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    // 吊销 refresh token
    if let Some(refresh_token) = JwtUtils::extract_refresh_token_from_cookie(request)
        && let Ok(claims) = JwtUtils::verify_refresh_token(&refresh_token)
    {
        revoke(&refresh_token, claims.exp as i64);
    }

    // 清除 access token 对应的用户缓存
    if let Some(access_token) = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
    {
        let cache = service.get_cache(request);
        cache.remove(&format!("user:{access_token}")).await;
    }

    let cookie = JwtUtils::create_empty_refresh_token_cookie();
    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::success_empty("注销成功")))
}
