use serde::Serialize;
use ts_rs::TS;

use super::entities::Section;
use crate::models::PaginationInfo;

/// 班级教师信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct SectionTeacher {
    pub id: i64,
    pub username: String,
    pub profile_name: Option<String>,
}

/// 班级列表项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct SectionListItem {
    #[serde(flatten)]
    pub section: Section,
    pub teacher: Option<SectionTeacher>,
    pub student_count: i64,
}

/// 班级列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct SectionListResponse {
    pub items: Vec<SectionListItem>,
    pub pagination: PaginationInfo,
}
