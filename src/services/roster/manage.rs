//! 名册维护
//!
//! 名册行由班级教师维护。写操作限管理员或班级教师，
//! 名册读取对班级成员开放。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::RosterService;
use crate::middlewares::RequireJWT;
use crate::models::roster::requests::{CreateStudentRequest, RosterQuery, UpdateStudentRequest};
use crate::models::roster::responses::RosterResponse;
use crate::models::sections::entities::Section;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access;
use crate::storage::Storage;
use crate::utils::validate::validate_person_name;

/// 取班级并校验写权限（管理员或班级教师）
async fn fetch_section_for_write(
    storage: &Arc<dyn Storage>,
    current_user: &User,
    section_id: i64,
) -> Result<Section, HttpResponse> {
    let section = match storage.get_section_by_id(section_id).await {
        Ok(Some(section)) => section,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SectionNotFound,
                "班级不存在",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级失败: {e}"),
                )),
            );
        }
    };

    access::ensure_section_owner(current_user, &section)?;
    Ok(section)
}

/// 添加名册学生
/// POST /sections/{section_id}/students
pub async fn add_student(
    service: &RosterService,
    request: &HttpRequest,
    section_id: i64,
    req: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if let Err(resp) = fetch_section_for_write(&storage, &current_user, section_id).await {
        return Ok(resp);
    }

    if let Err(msg) = validate_person_name(&req.first_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }
    if let Err(msg) = validate_person_name(&req.last_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 关联登录账号时：账号必须存在，且同一账号在一个班级只能有一行
    if let Some(user_id) = req.user_id {
        match storage.get_user_by_id(user_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::UserNotFound,
                    "关联的登录账号不存在",
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
        }

        match storage
            .get_student_by_user_and_section(user_id, section_id)
            .await
        {
            Ok(Some(_)) => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::StudentAlreadyEnrolled,
                    "该账号已在本班级名册中",
                )));
            }
            Ok(None) => {}
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询名册失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage.add_student(section_id, req).await {
        Ok(student) => Ok(HttpResponse::Ok().json(ApiResponse::success(student, "添加成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("添加名册学生失败: {e}"),
            )),
        ),
    }
}

/// 列出班级名册
/// GET /sections/{section_id}/students
pub async fn list_students(
    service: &RosterService,
    request: &HttpRequest,
    section_id: i64,
    query: RosterQuery,
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

    // 名册读取对班级成员开放
    if let Err(resp) = access::ensure_section_member(&storage, &current_user, &section).await {
        return Ok(resp);
    }

    match storage.list_section_students(section_id, query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RosterResponse { section_id, items },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询名册失败: {e}"),
            )),
        ),
    }
}

/// 更新名册学生
/// PUT /sections/{section_id}/students/{student_id}
pub async fn update_student(
    service: &RosterService,
    request: &HttpRequest,
    section_id: i64,
    student_id: i64,
    req: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if let Err(resp) = fetch_section_for_write(&storage, &current_user, section_id).await {
        return Ok(resp);
    }

    if let Some(ref first_name) = req.first_name
        && let Err(msg) = validate_person_name(first_name)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }
    if let Some(ref last_name) = req.last_name
        && let Err(msg) = validate_person_name(last_name)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    match storage.update_student(section_id, student_id, req).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(student, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "名册学生不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新名册学生失败: {e}"),
            )),
        ),
    }
}

/// 移除名册学生
/// DELETE /sections/{section_id}/students/{student_id}
pub async fn remove_student(
    service: &RosterService,
    request: &HttpRequest,
    section_id: i64,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if let Err(resp) = fetch_section_for_write(&storage, &current_user, section_id).await {
        return Ok(resp);
    }

    match storage.remove_student(section_id, student_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("移除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "名册学生不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("移除名册学生失败: {e}"),
            )),
        ),
    }
}
