use serde::Deserialize;
use ts_rs::TS;

/// 创建班级请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct CreateSectionRequest {
    pub name: String,
    pub grade_level: Option<String>,
    pub description: Option<String>,
    pub school_year: String,
    /// 管理员可以代教师创建；教师创建时忽略此字段
    pub teacher_id: Option<i64>,
}

/// 更新班级请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct UpdateSectionRequest {
    pub name: Option<String>,
    pub grade_level: Option<String>,
    pub description: Option<String>,
    pub school_year: Option<String>,
}

/// 班级列表查询
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct SectionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub teacher_id: Option<i64>,
    pub school_year: Option<String>,
    pub search: Option<String>,
}
