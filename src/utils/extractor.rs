//! 路径参数安全提取器
//!
//! 直接使用 `web::Path<i64>` 时，非法输入会产生默认的 404/400 响应体，
//! 与统一的 `ApiResponse` 信封不一致。这里为每类资源 ID 生成一个
//! `FromRequest` 提取器，解析失败时返回信封格式的 400。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(param: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("路径参数 {param} 无效"),
    ));
    actix_web::error::InternalError::from_response("invalid path parameter", response).into()
}

macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal) => {
        /// 解析路径中的正整数 ID
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                match parsed {
                    Some(id) => ready(Ok($name(id))),
                    None => ready(Err(bad_request($param))),
                }
            }
        }
    };
}

define_safe_id_extractor!(SafeIDI64, "id");
define_safe_id_extractor!(SafeSectionIdI64, "section_id");
define_safe_id_extractor!(SafeStudentIdI64, "student_id");
define_safe_id_extractor!(SafeAssignmentIdI64, "assignment_id");

static FILE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{8,64}$").expect("Invalid file token regex"));

/// 解析路径中的文件下载 token
pub struct SafeFileToken(pub String);

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .match_info()
            .get("token")
            .filter(|raw| FILE_TOKEN_RE.is_match(raw))
            .map(|raw| raw.to_string());

        match token {
            Some(token) => ready(Ok(SafeFileToken(token))),
            None => ready(Err(bad_request("token"))),
        }
    }
}
