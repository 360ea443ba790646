use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::errors::Result;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_user(
    service: &UserService,
    user_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let result = storage.get_user_by_id(user_id).await;
    Ok(user_lookup_response(
        result,
        format!("User with id {user_id} not found."),
    ))
}

pub async fn get_user_by_email(
    service: &UserService,
    email: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let result = storage.get_user_by_email(email).await;
    Ok(user_lookup_response(
        result,
        format!("User with email {email} not found."),
    ))
}

pub async fn get_user_by_username(
    service: &UserService,
    username: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let result = storage.get_user_by_username(username).await;
    Ok(user_lookup_response(
        result,
        format!("User with username {username} not found."),
    ))
}

fn user_lookup_response(result: Result<Option<User>>, not_found: String) -> HttpResponse {
    match result {
        Ok(Some(user)) => HttpResponse::Ok().json(ApiResponse::success(
            user,
            "User information retrieved successfully",
        )),
        Ok(None) => HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::UserNotFound, not_found)),
        Err(e) => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Failed to get user information: {e}"),
        )),
    }
}
