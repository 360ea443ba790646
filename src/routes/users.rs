use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::users::requests::{ChangeUserRoleRequest, CreateUserRequest};
use crate::services::UserService;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn list_users(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(&req).await
}

pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(user_data.into_inner(), &req).await
}

pub async fn get_user(req: HttpRequest, user_id: web::Path<String>) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(&user_id, &req).await
}

pub async fn get_user_by_email(
    req: HttpRequest,
    email: web::Path<String>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user_by_email(&email, &req).await
}

pub async fn get_user_by_username(
    req: HttpRequest,
    username: web::Path<String>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user_by_username(&username, &req).await
}

pub async fn change_user_role(
    req: HttpRequest,
    user_id: web::Path<String>,
    role_data: web::Json<ChangeUserRoleRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .change_user_role(&user_id, role_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .route("", web::get().to(list_users))
            .route("", web::post().to(create_user))
            .route("/email/{email}", web::get().to(get_user_by_email))
            .route("/username/{username}", web::get().to(get_user_by_username))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}/role", web::put().to(change_user_role)),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::json;

    use super::*;
    use crate::models::ErrorCode;
    use crate::routes::test_support::{data_of, memory_storage};
    use crate::utils::json_error_handler;

    fn alice() -> serde_json::Value {
        json!({
            "username": "alice",
            "password": "Secret1",
            "email": "alice@example.com",
            "role": "student"
        })
    }

    #[actix_web::test]
    async fn test_create_and_fetch_user() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_user_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(alice())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let user = data_of(&body);
        assert_eq!(user["username"], "alice");
        assert_eq!(user["role"], "student");
        assert_eq!(user["owner"], "anonymous");
        assert!(user.get("password_hash").is_none());
        let id = user["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{id}"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(data_of(&body)["email"], "alice@example.com");

        // 大小写不同的 ID 不是同一条记录
        let upper = id.to_uppercase();
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{upper}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get()
            .uri("/api/v1/users/email/alice@example.com")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(data_of(&body)["id"], id.as_str());

        let req = test::TestRequest::get()
            .uri("/api/v1/users/username/alice")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(data_of(&body)["id"], id.as_str());

        let req = test::TestRequest::get().uri("/api/v1/users").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(data_of(&body)["items"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_create_user_validation_order() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_user_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"username": "bob", "email": "bob@example.com", "role": "admin"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::InvalidPayload as i32);
        assert_eq!(
            body["message"],
            "Ensure 'username', 'password', and 'email' are provided."
        );

        let mut bad_email = alice();
        bad_email["email"] = json!("not-an-email");
        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(bad_email)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid email address.");

        let mut weak = alice();
        weak["password"] = json!("short");
        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(weak)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::UserPasswordInvalid as i32);

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(alice())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        // 重复邮箱优先于密码校验
        let mut duplicate = alice();
        duplicate["password"] = json!("weak");
        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(duplicate)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Email address already exists.");
    }

    #[actix_web::test]
    async fn test_user_lookups_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_user_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "No users found.");

        let missing = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{missing}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], format!("User with id {missing} not found."));

        let req = test::TestRequest::get()
            .uri("/api/v1/users/username/ghost")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "User with username ghost not found.");

        // ID 按原样比较，任意未知 ID 均为 NotFound
        let req = test::TestRequest::get().uri("/api/v1/users/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User with id abc not found.");
        assert_eq!(body["category"], "not_found");

        let req = test::TestRequest::get()
            .uri("/api/v1/users/email/nobody@example.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "User with email nobody@example.com not found."
        );
    }

    #[actix_web::test]
    async fn test_change_user_role() {
        let app = test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(memory_storage().await)
                .configure(configure_user_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(alice())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let id = data_of(&body)["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/users/{id}/role"))
            .set_json(json!({"role": "instructor"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(data_of(&body)["role"], "instructor");

        let req = test::TestRequest::put()
            .uri("/api/v1/users/no-such-user/role")
            .set_json(json!({"role": "admin"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User not found.");

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/users/{id}/role"))
            .set_json(json!({"role": "dean"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::InvalidPayload as i32);
    }
}
