//! 评分写入
//!
//! 评分是提交行唯一允许的变更。写入成功后把确认值合并进进度快照，
//! 失败时不触碰任何本地状态（快照保持服务器最后一次确认的数据）。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::submissions::responses::GradeUpdateResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::ProgressService;
use crate::services::access;
use crate::utils::validate::validate_grade;

/// 写入评分
/// PUT /submissions/{id}/grade
///
/// 权限：管理员或作业所在班级的教师
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: GradeSubmissionRequest,
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

    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
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

    // 分数必须在 [0, max_score] 内
    if let Err(msg) = validate_grade(req.grade, assignment.max_score) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 权威写入
    let updated = match storage
        .update_submission_grade(submission_id, req.grade, req.feedback.clone())
        .await
    {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            // 写入失败：不合并快照，本地状态保持上一次服务器确认的数据
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("写入评分失败: {e}"),
                )),
            );
        }
    };

    // 写入确认后才合并进度快照
    let cache = service.get_cache(request);
    ProgressService::merge_grade_into_snapshot(
        &cache,
        updated.assignment_id,
        updated.id,
        updated.grade,
        updated.feedback.clone(),
    )
    .await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        GradeUpdateResponse {
            id: updated.id,
            grade: updated.grade,
            feedback: updated.feedback,
        },
        "评分成功",
    )))
}
