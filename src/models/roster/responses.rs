use serde::Serialize;
use ts_rs::TS;

use super::entities::Student;

/// 名册响应（整班返回，不分页）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct RosterResponse {
    pub section_id: i64,
    pub items: Vec<Student>,
}
