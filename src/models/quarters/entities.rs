use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学期（评分周期）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quarter.ts")]
pub struct Quarter {
    pub id: i64,
    pub name: String,
    pub school_year: String,
    pub starts_on: Option<chrono::DateTime<chrono::Utc>>,
    pub ends_on: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
