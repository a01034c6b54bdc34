//! 班级列表（按角色过滤）

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::middlewares::RequireJWT;
use crate::models::sections::requests::SectionListQuery;
use crate::models::sections::responses::{SectionListItem, SectionListResponse};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, PaginationInfo};

/// 列出班级
/// GET /sections
///
/// 管理员：全部；教师：自己的班级；学生：名册所在的班级
pub async fn list_sections(
    service: &SectionService,
    request: &HttpRequest,
    mut query: SectionListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    match current_user.role {
        UserRole::Admin => {
            // 管理员可按任意条件查询
        }
        UserRole::Teacher => {
            // 教师强制只看自己的班级
            query.teacher_id = Some(current_user.id);
        }
        UserRole::Student => {
            // 学生：按名册关联逐个取回
            let section_ids = match storage.list_section_ids_for_user(current_user.id).await {
                Ok(ids) => ids,
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询名册失败: {e}"),
                        ),
                    ));
                }
            };

            let mut items = Vec::with_capacity(section_ids.len());
            for section_id in section_ids {
                if let Ok(Some(section)) = storage.get_section_by_id(section_id).await {
                    items.push(SectionListItem {
                        teacher: None,
                        student_count: 0,
                        section,
                    });
                }
            }

            let total = items.len() as i64;
            return Ok(HttpResponse::Ok().json(ApiResponse::success(
                SectionListResponse {
                    items,
                    pagination: PaginationInfo {
                        page: 1,
                        page_size: total.max(1),
                        total,
                        total_pages: 1,
                    },
                },
                "查询成功",
            )));
        }
        UserRole::Unknown => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "无法识别的角色",
            )));
        }
    }

    match storage.list_sections_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询班级列表失败: {e}"),
            )),
        ),
    }
}
