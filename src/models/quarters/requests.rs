use serde::Deserialize;
use ts_rs::TS;

/// 创建学期请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quarter.ts")]
pub struct CreateQuarterRequest {
    pub name: String,
    pub school_year: String,
    pub starts_on: Option<chrono::DateTime<chrono::Utc>>,
    pub ends_on: Option<chrono::DateTime<chrono::Utc>>,
}

/// 更新学期请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quarter.ts")]
pub struct UpdateQuarterRequest {
    pub name: Option<String>,
    pub school_year: Option<String>,
    pub starts_on: Option<chrono::DateTime<chrono::Utc>>,
    pub ends_on: Option<chrono::DateTime<chrono::Utc>>,
}

/// 学期列表查询
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quarter.ts")]
pub struct QuarterListQuery {
    pub school_year: Option<String>,
}
