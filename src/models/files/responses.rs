use serde::Serialize;
use ts_rs::TS;

/// 文件信息（对外展示）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct FileInfo {
    pub token: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub uploaded_at: String,
}

impl From<crate::models::files::entities::File> for FileInfo {
    fn from(file: crate::models::files::entities::File) -> Self {
        Self {
            token: file.token,
            file_name: file.file_name,
            file_size: file.file_size,
            file_type: file.file_type,
            uploaded_at: file.uploaded_at.to_rfc3339(),
        }
    }
}

/// 上传成功响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct UploadResponse {
    pub token: String,
    pub file_name: String,
    pub file_size: i64,
}
