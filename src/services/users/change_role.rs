use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::{ApiResponse, ErrorCode, users::requests::ChangeUserRoleRequest};

pub async fn change_user_role(
    service: &UserService,
    user_id: &str,
    role_data: ChangeUserRoleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_user_role(user_id, role_data.role).await {
        Ok(Some(user)) => {
            info!("User {} role changed to {}", user.id, user.role);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                user,
                "User role updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found.",
        ))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::UserUpdateFailed,
            format!("Failed to update user role: {e}"),
        ))),
    }
}
