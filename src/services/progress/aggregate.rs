//! 进度聚合流程
//!
//! 流程：作业 -> 班级 -> 权限 -> 名册 + 提交整批拉取 -> 最新提交收敛 -> 统计。
//! 名册或提交任何一路拉取失败都整体报错，不渲染混合新旧数据的结果。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;
use std::sync::Arc;

use super::{ProgressService, latest, snapshot_key};
use crate::cache::CacheResult;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::Assignment;
use crate::models::progress::responses::{
    AssignmentProgressResponse, NextUngradedResponse, ProgressEntry,
};
use crate::models::roster::requests::RosterQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access;
use crate::storage::Storage;

/// 获取作业进度
///
/// 权限：管理员或班级所属教师
pub async fn get_assignment_progress(
    service: &ProgressService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);

    let (assignment, response) =
        match authorize_and_build(&storage, request, assignment_id).await {
            Ok(pair) => pair,
            Err(resp) => return Ok(resp),
        };

    // 写入快照缓存，供评分确认后就地合并
    if let Ok(json) = serde_json::to_string(&response) {
        cache.insert_raw(snapshot_key(assignment.id), json, 0).await;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}

/// 按展示顺序找下一份待评分提交
///
/// 优先使用进度快照（不重新排序、不重新拉取）；快照未命中时重建一次。
pub async fn get_next_ungraded(
    service: &ProgressService,
    request: &HttpRequest,
    assignment_id: i64,
    current_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);

    let snapshot = match cache.get_raw(&snapshot_key(assignment_id)).await {
        CacheResult::Found(json) => serde_json::from_str::<AssignmentProgressResponse>(&json).ok(),
        _ => None,
    };

    let response = match snapshot {
        Some(snapshot) => {
            // 快照存在时仍需做权限校验
            if let Err(resp) = authorize_only(&storage, request, assignment_id).await {
                return Ok(resp);
            }
            snapshot
        }
        None => match authorize_and_build(&storage, request, assignment_id).await {
            Ok((assignment, response)) => {
                if let Ok(json) = serde_json::to_string(&response) {
                    cache.insert_raw(snapshot_key(assignment.id), json, 0).await;
                }
                response
            }
            Err(resp) => return Ok(resp),
        },
    };

    let ordered: Vec<_> = response
        .entries
        .iter()
        .filter_map(|entry| entry.latest_submission.clone())
        .collect();

    let submission_id = latest::next_ungraded(&ordered, current_id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        NextUngradedResponse { submission_id },
        "查询成功",
    )))
}

/// 校验当前用户对作业的进度访问权限，并返回作业
async fn authorize(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    assignment_id: i64,
) -> Result<Assignment, HttpResponse> {
    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Err(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
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

    // 进度视图面向批改：仅管理员或班级所属教师
    access::ensure_section_owner(&current_user, &section)?;

    Ok(assignment)
}

async fn authorize_only(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    assignment_id: i64,
) -> Result<(), HttpResponse> {
    authorize(storage, request, assignment_id).await.map(|_| ())
}

async fn authorize_and_build(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    assignment_id: i64,
) -> Result<(Assignment, AssignmentProgressResponse), HttpResponse> {
    let assignment = authorize(storage, request, assignment_id).await?;
    let response = build_progress(storage, &assignment).await?;
    Ok((assignment, response))
}

/// 拉取名册与提交并组装进度响应
pub(super) async fn build_progress(
    storage: &Arc<dyn Storage>,
    assignment: &Assignment,
) -> Result<AssignmentProgressResponse, HttpResponse> {
    // 名册
    let roster = storage
        .list_section_students(assignment.section_id, RosterQuery { search: None })
        .await
        .map_err(|e| {
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询班级名册失败: {e}"),
            ))
        })?;

    // 该作业的全部提交行
    let submissions = storage
        .list_assignment_submissions(assignment.id)
        .await
        .map_err(|e| {
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询作业提交失败: {e}"),
            ))
        })?;

    let latest_by_student = latest::reduce_latest(submissions);
    let ordered = latest::sort_for_display(&latest_by_student);
    let metrics = latest::compute_metrics(latest_by_student.values());

    let roster_by_id: HashMap<i64, _> = roster.iter().map(|s| (s.id, s.clone())).collect();

    // 有提交的学生按展示顺序在前；名册之外的孤儿提交没有名册行可连接，不进展示列表
    let mut entries: Vec<ProgressEntry> = Vec::with_capacity(roster.len());
    for submission in ordered {
        if let Some(student) = roster_by_id.get(&submission.student_id) {
            entries.push(ProgressEntry {
                student: student.clone(),
                display_name: student.display_name(),
                latest_submission: Some(submission),
            });
        }
    }

    // 没有任何提交的学生排在最后，同时单独给出 not_submitted 列表
    let not_submitted: Vec<_> = roster
        .iter()
        .filter(|student| !latest_by_student.contains_key(&student.id))
        .cloned()
        .collect();

    for student in &not_submitted {
        entries.push(ProgressEntry {
            student: student.clone(),
            display_name: student.display_name(),
            latest_submission: None,
        });
    }

    Ok(AssignmentProgressResponse {
        assignment_id: assignment.id,
        total_students: roster.len() as i64,
        metrics,
        entries,
        not_submitted,
    })
}
