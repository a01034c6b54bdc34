use serde::Serialize;
use ts_rs::TS;

use super::entities::Quarter;

/// 学期列表响应（数量有限，不分页）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quarter.ts")]
pub struct QuarterListResponse {
    pub items: Vec<Quarter>,
}
