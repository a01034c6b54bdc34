use serde::Deserialize;
use ts_rs::TS;

/// 创建模块请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct CreateModuleRequest {
    pub quarter_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// 附件文件 token 列表
    pub attachments: Option<Vec<String>>,
}

/// 更新模块请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct UpdateModuleRequest {
    pub quarter_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub attachments: Option<Vec<String>>,
}

/// 模块列表查询
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct ModuleListQuery {
    pub quarter_id: Option<i64>,
    pub search: Option<String>,
}
