pub mod login;
pub mod profile;
pub mod token;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::auth::requests::{ChangePasswordRequest, LoginRequest, UpdateProfileRequest};
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Arc<dyn ObjectCache> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
            .expect("Cache not found in app data")
            .get_ref()
            .clone()
    }

    /// 登录
    pub async fn login(&self, request: &HttpRequest, req: LoginRequest) -> ActixResult<HttpResponse> {
        login::login(self, request, req).await
    }

    /// 刷新 access token
    pub async fn refresh_token(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::refresh_token(self, request).await
    }

    /// 注销
    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::logout(self, request).await
    }

    /// 获取当前用户资料
    pub async fn get_profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::get_profile(self, request).await
    }

    /// 更新当前用户资料
    pub async fn update_profile(
        &self,
        request: &HttpRequest,
        req: UpdateProfileRequest,
    ) -> ActixResult<HttpResponse> {
        profile::update_profile(self, request, req).await
    }

    /// 修改密码
    pub async fn change_password(
        &self,
        request: &HttpRequest,
        req: ChangePasswordRequest,
    ) -> ActixResult<HttpResponse> {
        profile::change_password(self, request, req).await
    }
}
