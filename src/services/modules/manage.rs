//! 课程模块维护

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::ModuleService;
use crate::middlewares::RequireJWT;
use crate::models::files::responses::FileInfo;
use crate::models::modules::entities::Module;
use crate::models::modules::requests::{CreateModuleRequest, ModuleListQuery, UpdateModuleRequest};
use crate::models::modules::responses::{ModuleListResponse, ModuleResponse};
use crate::models::sections::entities::Section;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access;
use crate::storage::Storage;

/// 取模块所在班级
async fn fetch_section_of_module(
    storage: &Arc<dyn Storage>,
    module: &Module,
) -> Result<Section, HttpResponse> {
    match storage.get_section_by_id(module.section_id).await {
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

/// 组装带附件的模块响应
async fn with_files(
    storage: &Arc<dyn Storage>,
    module: Module,
) -> Result<ModuleResponse, HttpResponse> {
    let files = storage.get_module_files(module.id).await.map_err(|e| {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("查询模块附件失败: {e}"),
        ))
    })?;

    Ok(ModuleResponse {
        module,
        files: files.into_iter().map(FileInfo::from).collect(),
    })
}

/// 创建模块
/// POST /sections/{section_id}/modules
///
/// 权限：管理员或班级教师
pub async fn create_module(
    service: &ModuleService,
    request: &HttpRequest,
    section_id: i64,
    req: CreateModuleRequest,
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
            "模块标题不能为空",
        )));
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

    let module = match storage
        .create_module(section_id, req, current_user.id)
        .await
    {
        Ok(module) => module,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建模块失败: {e}"),
                )),
            );
        }
    };

    match with_files(&storage, module).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "创建成功"))),
        Err(resp) => Ok(resp),
    }
}

/// 获取模块详情（含附件）
/// GET /modules/{id}
///
/// 权限：班级成员
pub async fn get_module(
    service: &ModuleService,
    request: &HttpRequest,
    module_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let module = match storage.get_module_by_id(module_id).await {
        Ok(Some(module)) => module,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ModuleNotFound,
                "模块不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询模块失败: {e}"),
                )),
            );
        }
    };

    let section = match fetch_section_of_module(&storage, &module).await {
        Ok(section) => section,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = access::ensure_section_member(&storage, &current_user, &section).await {
        return Ok(resp);
    }

    match with_files(&storage, module).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(resp) => Ok(resp),
    }
}

/// 列出班级模块
/// GET /sections/{section_id}/modules
///
/// 权限：班级成员
pub async fn list_modules(
    service: &ModuleService,
    request: &HttpRequest,
    section_id: i64,
    query: ModuleListQuery,
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

    if let Err(resp) = access::ensure_section_member(&storage, &current_user, &section).await {
        return Ok(resp);
    }

    let modules = match storage.list_section_modules(section_id, query).await {
        Ok(modules) => modules,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询模块列表失败: {e}"),
                )),
            );
        }
    };

    let mut items = Vec::with_capacity(modules.len());
    for module in modules {
        match with_files(&storage, module).await {
            Ok(response) => items.push(response),
            Err(resp) => return Ok(resp),
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ModuleListResponse { items },
        "查询成功",
    )))
}

/// 更新模块
/// PUT /modules/{id}
///
/// 权限：管理员或班级教师
pub async fn update_module(
    service: &ModuleService,
    request: &HttpRequest,
    module_id: i64,
    req: UpdateModuleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let module = match storage.get_module_by_id(module_id).await {
        Ok(Some(module)) => module,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ModuleNotFound,
                "模块不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询模块失败: {e}"),
                )),
            );
        }
    };

    let section = match fetch_section_of_module(&storage, &module).await {
        Ok(section) => section,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = access::ensure_section_owner(&current_user, &section) {
        return Ok(resp);
    }

    let updated = match storage
        .update_module(module_id, req, current_user.id)
        .await
    {
        Ok(Some(module)) => module,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ModuleNotFound,
                "模块不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("更新模块失败: {e}"),
                )),
            );
        }
    };

    match with_files(&storage, updated).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "更新成功"))),
        Err(resp) => Ok(resp),
    }
}

/// 删除模块
/// DELETE /modules/{id}
///
/// 权限：管理员或班级教师
pub async fn delete_module(
    service: &ModuleService,
    request: &HttpRequest,
    module_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let module = match storage.get_module_by_id(module_id).await {
        Ok(Some(module)) => module,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ModuleNotFound,
                "模块不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询模块失败: {e}"),
                )),
            );
        }
    };

    let section = match fetch_section_of_module(&storage, &module).await {
        Ok(section) => section,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = access::ensure_section_owner(&current_user, &section) {
        return Ok(resp);
    }

    match storage.delete_module(module_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleNotFound,
            "模块不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除模块失败: {e}"),
            )),
        ),
    }
}
