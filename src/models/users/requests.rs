use super::entities::UserRole;
use serde::Deserialize;

// 用户创建请求
// 文本字段缺失时按空串处理，由服务层给出统一的载荷错误
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
    pub role: UserRole,
}

// 修改用户角色请求
#[derive(Debug, Deserialize)]
pub struct ChangeUserRoleRequest {
    pub role: UserRole,
}
