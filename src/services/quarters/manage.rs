//! 学期维护
//!
//! 学期是全局评分周期，写操作仅管理员（路由层 RequireRole 已拦截），
//! 列表对所有登录用户开放。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuarterService;
use crate::models::quarters::requests::{
    CreateQuarterRequest, QuarterListQuery, UpdateQuarterRequest,
};
use crate::models::quarters::responses::QuarterListResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_school_year;

/// 创建学期
/// POST /quarters
pub async fn create_quarter(
    service: &QuarterService,
    request: &HttpRequest,
    req: CreateQuarterRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "学期名称不能为空",
        )));
    }

    if let Err(msg) = validate_school_year(&req.school_year) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if let (Some(starts_on), Some(ends_on)) = (req.starts_on, req.ends_on)
        && ends_on <= starts_on
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "学期结束时间必须晚于开始时间",
        )));
    }

    match storage.create_quarter(req).await {
        Ok(quarter) => Ok(HttpResponse::Ok().json(ApiResponse::success(quarter, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建学期失败: {e}"),
            )),
        ),
    }
}

/// 列出学期
/// GET /quarters
pub async fn list_quarters(
    service: &QuarterService,
    request: &HttpRequest,
    query: QuarterListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_quarters(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuarterListResponse { items },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询学期列表失败: {e}"),
            )),
        ),
    }
}

/// 更新学期
/// PUT /quarters/{id}
pub async fn update_quarter(
    service: &QuarterService,
    request: &HttpRequest,
    quarter_id: i64,
    req: UpdateQuarterRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref school_year) = req.school_year
        && let Err(msg) = validate_school_year(school_year)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    match storage.update_quarter(quarter_id, req).await {
        Ok(Some(quarter)) => Ok(HttpResponse::Ok().json(ApiResponse::success(quarter, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuarterNotFound,
            "学期不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新学期失败: {e}"),
            )),
        ),
    }
}

/// 删除学期
/// DELETE /quarters/{id}
pub async fn delete_quarter(
    service: &QuarterService,
    request: &HttpRequest,
    quarter_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_quarter(quarter_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuarterNotFound,
            "学期不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除学期失败: {e}"),
            )),
        ),
    }
}
