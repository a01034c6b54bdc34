//! 登录

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::AuthService;
use crate::config::AppConfig;
use crate::models::auth::requests::LoginRequest;
use crate::models::auth::responses::LoginResponse;
use crate::models::users::entities::UserStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

/// 登录
/// POST /auth/login
pub async fn login(
    service: &AuthService,
    request: &HttpRequest,
    req: LoginRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();

    let identifier = req.identifier.trim();
    if identifier.is_empty() || req.password.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "用户名和密码不能为空",
        )));
    }

    let user = match storage.get_user_by_username_or_email(identifier).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            // 统一口径，不暴露账号是否存在
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "用户名或密码错误",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询用户失败: {e}"),
                )),
            );
        }
    };

    if !verify_password(&req.password, &user.password_hash) {
        info!("Login failed for identifier: {}", identifier);
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "用户名或密码错误",
        )));
    }

    if user.status != UserStatus::Active {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "账号未激活或已被停用",
        )));
    }

    // remember_me 使用更长的 refresh token 有效期
    let refresh_expiry = if req.remember_me {
        Some(chrono::Duration::days(
            config.jwt.refresh_token_remember_me_expiry,
        ))
    } else {
        None
    };

    let token_pair = match user.generate_token_pair(refresh_expiry).await {
        Ok(pair) => pair,
        Err(e) => {
            warn!("Failed to generate token pair: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "生成令牌失败",
                )),
            );
        }
    };

    if let Err(e) = storage.update_last_login(user.id).await {
        // 登录时间更新失败不阻断登录
        warn!("Failed to update last login for user {}: {}", user.id, e);
    }

    let cookie = JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

    Ok(HttpResponse::Ok().cookie(cookie).json(ApiResponse::success(
        LoginResponse {
            user,
            access_token: token_pair.access_token,
            expires_in: config.jwt.access_token_expiry * 60,
        },
        "登录成功",
    )))
}
