use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 业务错误码
///
/// 前两位对应 HTTP 状态，后三位为细分编号。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/error_code.ts")]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,

    Unauthorized = 40100,

    Forbidden = 40300,
    SectionPermissionDenied = 40301,

    NotFound = 40400,
    UserNotFound = 40401,
    SectionNotFound = 40402,
    StudentNotFound = 40403,
    QuarterNotFound = 40404,
    ModuleNotFound = 40405,
    AssignmentNotFound = 40406,
    QuizNotFound = 40407,
    SubmissionNotFound = 40408,
    FileNotFound = 40409,

    UserAlreadyExists = 40901,
    StudentAlreadyEnrolled = 40902,

    PayloadTooLarge = 41300,
    UnsupportedFileType = 41500,
    TooManyRequests = 42900,

    InternalServerError = 50000,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 40100);
        assert_eq!(ErrorCode::SectionPermissionDenied as i32, 40301);
        assert_eq!(ErrorCode::SubmissionNotFound as i32, 40408);
        assert_eq!(ErrorCode::InternalServerError as i32, 50000);
    }
}
