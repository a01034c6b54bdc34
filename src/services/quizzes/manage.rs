//! 测验维护
//!
//! 学生视角的读取会剥离题目答案（`Quiz::redact_answers`）。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::QuizService;
use crate::middlewares::RequireJWT;
use crate::models::quizzes::entities::Quiz;
use crate::models::quizzes::requests::{CreateQuizRequest, QuizListQuery, UpdateQuizRequest};
use crate::models::quizzes::responses::QuizListResponse;
use crate::models::sections::entities::Section;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access;
use crate::services::access::SectionAccess;
use crate::storage::Storage;

async fn fetch_section_of_quiz(
    storage: &Arc<dyn Storage>,
    quiz: &Quiz,
) -> Result<Section, HttpResponse> {
    match storage.get_section_by_id(quiz.section_id).await {
        Ok(Some(section)) => Ok(section),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SectionNotFound,
            "班级不存在",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询班级失败: {e}"),
            )),
        ),
    }
}

fn validate_questions(questions: &[crate::models::quizzes::entities::QuizQuestion]) -> Result<(), &'static str> {
    if questions.is_empty() {
        return Err("测验至少需要一道题目");
    }
    for question in questions {
        if question.prompt.trim().is_empty() {
            return Err("题目内容不能为空");
        }
        if question.options.len() < 2 {
            return Err("每道题目至少需要两个选项");
        }
        if let Some(answer) = question.answer
            && answer as usize >= question.options.len()
        {
            return Err("正确选项下标超出范围");
        }
        if !question.points.is_finite() || question.points <= 0.0 {
            return Err("题目分值必须为正数");
        }
    }
    Ok(())
}

/// 创建测验
/// POST /sections/{section_id}/quizzes
///
/// 权限：管理员或班级教师
pub async fn create_quiz(
    service: &QuizService,
    request: &HttpRequest,
    section_id: i64,
    req: CreateQuizRequest,
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

    if req.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "测验标题不能为空",
        )));
    }

    if let Err(msg) = validate_questions(&req.questions) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 学期必须存在
    match storage.get_quarter_by_id(req.quarter_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuarterNotFound,
                "学期不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学期失败: {e}"),
                )),
            );
        }
    }

    match storage.create_quiz(section_id, current_user.id, req).await {
        Ok(quiz) => Ok(HttpResponse::Ok().json(ApiResponse::success(quiz, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建测验失败: {e}"),
            )),
        ),
    }
}

/// 获取测验详情
/// GET /quizzes/{id}
///
/// 权限：班级成员；学生视角剥离答案
pub async fn get_quiz(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let quiz = match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(quiz)) => quiz,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuizNotFound,
                "测验不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测验失败: {e}"),
                )),
            );
        }
    };

    let section = match fetch_section_of_quiz(&storage, &quiz).await {
        Ok(section) => section,
        Err(resp) => return Ok(resp),
    };

    let quiz = match access::ensure_section_member(&storage, &current_user, &section).await {
        Ok(SectionAccess::Member(_)) => quiz.redact_answers(),
        Ok(_) => quiz,
        Err(resp) => return Ok(resp),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(quiz, "查询成功")))
}

/// 列出班级测验
/// GET /sections/{section_id}/quizzes
///
/// 权限：班级成员；学生视角剥离答案
pub async fn list_quizzes(
    service: &QuizService,
    request: &HttpRequest,
    section_id: i64,
    query: QuizListQuery,
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

    let is_member = match access::ensure_section_member(&storage, &current_user, &section).await {
        Ok(SectionAccess::Member(_)) => true,
        Ok(_) => false,
        Err(resp) => return Ok(resp),
    };

    let quizzes = match storage.list_section_quizzes(section_id, query).await {
        Ok(quizzes) => quizzes,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测验列表失败: {e}"),
                )),
            );
        }
    };

    let items = if is_member {
        quizzes.into_iter().map(Quiz::redact_answers).collect()
    } else {
        quizzes
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        QuizListResponse { items },
        "查询成功",
    )))
}

/// 更新测验
/// PUT /quizzes/{id}
///
/// 权限：管理员或班级教师
pub async fn update_quiz(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    req: UpdateQuizRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let quiz = match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(quiz)) => quiz,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuizNotFound,
                "测验不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测验失败: {e}"),
                )),
            );
        }
    };

    let section = match fetch_section_of_quiz(&storage, &quiz).await {
        Ok(section) => section,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = access::ensure_section_owner(&current_user, &section) {
        return Ok(resp);
    }

    if let Some(ref questions) = req.questions
        && let Err(msg) = validate_questions(questions)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    match storage.update_quiz(quiz_id, req).await {
        Ok(Some(quiz)) => Ok(HttpResponse::Ok().json(ApiResponse::success(quiz, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuizNotFound,
            "测验不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新测验失败: {e}"),
            )),
        ),
    }
}

/// 删除测验
/// DELETE /quizzes/{id}
///
/// 权限：管理员或班级教师
pub async fn delete_quiz(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let quiz = match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(quiz)) => quiz,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuizNotFound,
                "测验不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测验失败: {e}"),
                )),
            );
        }
    };

    let section = match fetch_section_of_quiz(&storage, &quiz).await {
        Ok(section) => section,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = access::ensure_section_owner(&current_user, &section) {
        return Ok(resp);
    }

    match storage.delete_quiz(quiz_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuizNotFound,
            "测验不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除测验失败: {e}"),
            )),
        ),
    }
}
