//! 资源级授权判定
//!
//! "只有资源所有者或管理员可以读写" 的判定集中在这里，
//! 各业务 handler 统一调用，不各自重复推导。
//! 路由级的角色门禁见 `middlewares::RequireRole`。

use actix_web::HttpResponse;
use std::sync::Arc;

use crate::models::roster::entities::Student;
use crate::models::sections::entities::Section;
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 用户对某个班级的访问级别
#[derive(Debug, Clone)]
pub enum SectionAccess {
    /// 管理员或班级所属教师：可读写
    Owner,
    /// 名册内学生（携带其名册行）：只读班级内容，可创建自己的提交
    Member(Student),
    /// 无权限
    Denied,
}

pub fn is_admin(user: &User) -> bool {
    user.role == UserRole::Admin
}

/// 管理员或资源所有者放行，否则返回 403 响应
pub fn ensure_admin_or_owner(user: &User, owner_id: i64) -> Result<(), HttpResponse> {
    if is_admin(user) || user.id == owner_id {
        return Ok(());
    }
    Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::Forbidden,
        "只有资源所有者或管理员可以执行此操作",
    )))
}

/// 管理员或班级所属教师放行，否则返回 403 响应
pub fn ensure_section_owner(user: &User, section: &Section) -> Result<(), HttpResponse> {
    if is_admin(user) {
        return Ok(());
    }
    if user.role == UserRole::Teacher && section.teacher_id == user.id {
        return Ok(());
    }
    Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::SectionPermissionDenied,
        "您不是该班级的教师",
    )))
}

/// 判定用户对班级的访问级别
pub async fn section_access(
    storage: &Arc<dyn Storage>,
    user: &User,
    section: &Section,
) -> Result<SectionAccess, HttpResponse> {
    if is_admin(user) {
        return Ok(SectionAccess::Owner);
    }

    if user.role == UserRole::Teacher && section.teacher_id == user.id {
        return Ok(SectionAccess::Owner);
    }

    if user.role == UserRole::Student {
        match storage
            .get_student_by_user_and_section(user.id, section.id)
            .await
        {
            Ok(Some(student)) => return Ok(SectionAccess::Member(student)),
            Ok(None) => return Ok(SectionAccess::Denied),
            Err(e) => {
                return Err(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询班级成员失败: {e}"),
                    )),
                );
            }
        }
    }

    Ok(SectionAccess::Denied)
}

/// 班级成员（含 Owner）放行，否则返回 403 响应
pub async fn ensure_section_member(
    storage: &Arc<dyn Storage>,
    user: &User,
    section: &Section,
) -> Result<SectionAccess, HttpResponse> {
    match section_access(storage, user, section).await? {
        SectionAccess::Denied => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::SectionPermissionDenied,
            "您不是该班级成员",
        ))),
        access => Ok(access),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{UserProfile, UserStatus};

    fn user(id: i64, role: UserRole) -> User {
        User {
            id,
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
            password_hash: String::new(),
            role,
            status: UserStatus::Active,
            profile: UserProfile {
                profile_name: format!("User {id}"),
                avatar_url: None,
            },
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn section(teacher_id: i64) -> Section {
        Section {
            id: 1,
            teacher_id,
            name: "Sampaguita".to_string(),
            grade_level: Some("Grade 7".to_string()),
            description: None,
            school_year: "2025-2026".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_admin_passes_owner_check() {
        assert!(ensure_admin_or_owner(&user(1, UserRole::Admin), 999).is_ok());
    }

    #[test]
    fn test_owner_passes_owner_check() {
        assert!(ensure_admin_or_owner(&user(5, UserRole::Teacher), 5).is_ok());
    }

    #[test]
    fn test_non_owner_rejected() {
        assert!(ensure_admin_or_owner(&user(5, UserRole::Teacher), 6).is_err());
        assert!(ensure_admin_or_owner(&user(5, UserRole::Student), 6).is_err());
    }

    #[test]
    fn test_section_owner_check() {
        let owning_teacher = user(7, UserRole::Teacher);
        let other_teacher = user(8, UserRole::Teacher);
        let admin = user(1, UserRole::Admin);
        let sec = section(7);

        assert!(ensure_section_owner(&owning_teacher, &sec).is_ok());
        assert!(ensure_section_owner(&other_teacher, &sec).is_err());
        assert!(ensure_section_owner(&admin, &sec).is_ok());
    }

    #[test]
    fn test_unknown_role_never_owner() {
        // 归一化失败的角色不拥有任何资源权限，即使 id 对得上
        let ghost = user(7, UserRole::Unknown);
        assert!(ensure_section_owner(&ghost, &section(7)).is_err());
    }
}
