use serde::Deserialize;
use ts_rs::TS;

/// 添加名册学生请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub user_id: Option<i64>,
}

/// 更新名册学生请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub user_id: Option<i64>,
}

/// 名册查询
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct RosterQuery {
    pub search: Option<String>,
}
