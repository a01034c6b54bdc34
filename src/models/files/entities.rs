use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 文件记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct File {
    /// 下载 token，同时是主键
    pub token: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub user_id: i64,
    /// 被模块等资源引用的次数
    pub citation_count: i32,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}
