//! 提交详情

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::entities::Submission;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access;
use crate::storage::Storage;

/// 检查用户是否可以查看某个提交
///
/// 管理员、班级教师、或提交人本人（名册行关联的登录账号）。
pub(super) async fn check_submission_access(
    storage: &Arc<dyn Storage>,
    current_user: &User,
    submission: &Submission,
) -> Result<(), HttpResponse> {
    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    let section = match storage.get_section_by_id(assignment.section_id).await {
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

    // 管理员或班级教师
    if access::ensure_section_owner(current_user, &section).is_ok() {
        return Ok(());
    }

    // 提交人本人
    if let Ok(Some(student)) = storage.get_student_by_id(submission.student_id).await
        && student.user_id == Some(current_user.id)
    {
        return Ok(());
    }

    Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::Forbidden,
        "没有查看该提交的权限",
    )))
}

/// 获取提交详情
pub async fn get_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    };

    if let Err(resp) = check_submission_access(&storage, &current_user, &submission).await {
        return Ok(resp);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "查询成功")))
}
