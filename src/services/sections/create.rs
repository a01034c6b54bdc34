//! 创建班级

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::middlewares::RequireJWT;
use crate::models::sections::requests::CreateSectionRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access;
use crate::utils::validate::validate_school_year;

/// 创建班级
/// POST /sections
///
/// 权限：教师（为自己创建）或管理员（可通过 teacher_id 代任意教师创建）
pub async fn create_section(
    service: &SectionService,
    request: &HttpRequest,
    req: CreateSectionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "班级名称不能为空",
        )));
    }

    if let Err(msg) = validate_school_year(&req.school_year) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 决定班级归属的教师
    let teacher_id = match req.teacher_id {
        Some(teacher_id) if access::is_admin(&current_user) => {
            // 目标必须是教师账号
            match storage.get_user_by_id(teacher_id).await {
                Ok(Some(user)) if user.role == UserRole::Teacher => teacher_id,
                Ok(Some(_)) => {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::BadRequest,
                        "指定的用户不是教师",
                    )));
                }
                Ok(None) => {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::UserNotFound,
                        "指定的教师不存在",
                    )));
                }
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询用户失败: {e}"),
                        ),
                    ));
                }
            }
        }
        _ => {
            if current_user.role != UserRole::Teacher && !access::is_admin(&current_user) {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "只有教师或管理员可以创建班级",
                )));
            }
            current_user.id
        }
    };

    match storage.create_section(teacher_id, req).await {
        Ok(section) => Ok(HttpResponse::Ok().json(ApiResponse::success(section, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建班级失败: {e}"),
            )),
        ),
    }
}
