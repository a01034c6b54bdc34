use serde::Serialize;
use ts_rs::TS;

use super::entities::Module;
use crate::models::files::responses::FileInfo;

/// 模块详情（含附件）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct ModuleResponse {
    #[serde(flatten)]
    pub module: Module,
    pub files: Vec<FileInfo>,
}

/// 模块列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct ModuleListResponse {
    pub items: Vec<ModuleResponse>,
}
