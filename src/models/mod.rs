pub mod common;

pub mod assignments;
pub mod auth;
pub mod files;
pub mod modules;
pub mod progress;
pub mod quarters;
pub mod quizzes;
pub mod roster;
pub mod sections;
pub mod submissions;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
