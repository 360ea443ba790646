//! 用户存储操作

use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{Result, TimetableError};
use crate::models::users::{
    entities::{User, UserRole},
    requests::CreateUserRequest,
};
use crate::storage::new_record_id;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest, owner: &str) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(new_record_id()),
            owner: Set(owner.to_string()),
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("创建用户失败: {e}")))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: &str) -> Result<Option<User>> {
        let result = Users::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 列出全部用户
    pub async fn list_users_impl(&self) -> Result<Vec<User>> {
        let users = Users::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    /// 修改用户角色
    pub async fn update_user_role_impl(&self, id: &str, role: UserRole) -> Result<Option<User>> {
        // 先检查用户是否存在
        let existing = self.get_user_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id.to_string()),
            role: Set(role.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("更新用户角色失败: {e}")))?;

        self.get_user_by_id_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_request(username: &str, email: &str, role: UserRole) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: "hashed-password".to_string(),
            email: email.to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup_user() {
        let storage = SeaOrmStorage::new_in_memory().await;
        let created = storage
            .create_user_impl(
                user_request("alice", "alice@example.com", UserRole::Student),
                "127.0.0.1",
            )
            .await
            .unwrap();

        assert_eq!(created.owner, "127.0.0.1");
        assert!(uuid::Uuid::parse_str(&created.id).is_ok());

        let by_id = storage.get_user_by_id_impl(&created.id).await.unwrap();
        assert_eq!(by_id.unwrap().email, "alice@example.com");

        let by_email = storage
            .get_user_by_email_impl("alice@example.com")
            .await
            .unwrap();
        assert_eq!(by_email.unwrap().id, created.id);

        let by_username = storage.get_user_by_username_impl("alice").await.unwrap();
        assert_eq!(by_username.unwrap().password_hash, "hashed-password");

        assert!(storage.get_user_by_id_impl("missing").await.unwrap().is_none());
        assert!(
            storage
                .get_user_by_email_impl("nobody@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_by_store() {
        let storage = SeaOrmStorage::new_in_memory().await;
        storage
            .create_user_impl(
                user_request("alice", "same@example.com", UserRole::Student),
                "anonymous",
            )
            .await
            .unwrap();

        let err = storage
            .create_user_impl(
                user_request("bob", "same@example.com", UserRole::Student),
                "anonymous",
            )
            .await
            .unwrap_err();
        assert!(crate::utils::is_unique_violation(err.message()));
    }

    #[tokio::test]
    async fn test_username_is_not_unique() {
        let storage = SeaOrmStorage::new_in_memory().await;
        for email in ["a@example.com", "b@example.com"] {
            storage
                .create_user_impl(user_request("twin", email, UserRole::Student), "anonymous")
                .await
                .unwrap();
        }

        let users = storage.list_users_impl().await.unwrap();
        assert_eq!(users.len(), 2);

        // 返回 ID 顺序中的第一条
        let first = storage.get_user_by_username_impl("twin").await.unwrap().unwrap();
        let min_id = users.iter().map(|u| u.id.clone()).min().unwrap();
        assert_eq!(first.id, min_id);
    }

    #[tokio::test]
    async fn test_list_users_ordered_by_id() {
        let storage = SeaOrmStorage::new_in_memory().await;
        assert!(storage.list_users_impl().await.unwrap().is_empty());

        for i in 0..5 {
            storage
                .create_user_impl(
                    user_request(&format!("user{i}"), &format!("u{i}@example.com"), UserRole::Student),
                    "anonymous",
                )
                .await
                .unwrap();
        }

        let ids: Vec<String> = storage
            .list_users_impl()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn test_update_user_role() {
        let storage = SeaOrmStorage::new_in_memory().await;
        let created = storage
            .create_user_impl(
                user_request("carol", "carol@example.com", UserRole::Student),
                "anonymous",
            )
            .await
            .unwrap();

        let updated = storage
            .update_user_role_impl(&created.id, UserRole::Instructor)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.role, UserRole::Instructor);
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.password_hash, created.password_hash);

        let missing = storage
            .update_user_role_impl("missing", UserRole::Admin)
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
