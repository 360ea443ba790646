pub mod change_role;
pub mod create;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::requests::{ChangeUserRoleRequest, CreateUserRequest};
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
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

    // 创建用户
    pub async fn create_user(
        &self,
        user_data: CreateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_user(self, user_data, request).await
    }

    // 根据ID获取用户
    pub async fn get_user(&self, user_id: &str, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_user(self, user_id, request).await
    }

    // 根据邮箱获取用户
    pub async fn get_user_by_email(
        &self,
        email: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_user_by_email(self, email, request).await
    }

    // 根据用户名获取用户
    pub async fn get_user_by_username(
        &self,
        username: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_user_by_username(self, username, request).await
    }

    // 获取用户列表
    pub async fn list_users(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_users(self, request).await
    }

    // 修改用户角色
    pub async fn change_user_role(
        &self,
        user_id: &str,
        role_data: ChangeUserRoleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        change_role::change_user_role(self, user_id, role_data, request).await
    }
}
