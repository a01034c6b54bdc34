//! 更新班级

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::middlewares::RequireJWT;
use crate::models::sections::requests::UpdateSectionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access;
use crate::utils::validate::validate_school_year;

/// 更新班级
/// PUT /sections/{id}
///
/// 权限：管理员或班级教师
pub async fn update_section(
    service: &SectionService,
    request: &HttpRequest,
    section_id: i64,
    req: UpdateSectionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let section = match storage.get_section_by_id(section_id).await {
        Ok(Some(section)) => section,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SectionNotFound,
                "班级不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级失败: {e}"),
                )),
            );
        }
    };

    if let Err(resp) = access::ensure_section_owner(&current_user, &section) {
        return Ok(resp);
    }

    if let Some(ref school_year) = req.school_year
        && let Err(msg) = validate_school_year(school_year)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    match storage.update_section(section_id, req).await {
        Ok(Some(section)) => Ok(HttpResponse::Ok().json(ApiResponse::success(section, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SectionNotFound,
            "班级不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新班级失败: {e}"),
            )),
        ),
    }
}
