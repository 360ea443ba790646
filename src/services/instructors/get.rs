use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::InstructorService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_instructor_by_name(
    service: &InstructorService,
    name: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_instructor_by_name(name).await {
        Ok(Some(instructor)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            instructor,
            "Instructor retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::InstructorNotFound,
            format!("Instructor with name {name} not found."),
        ))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Failed to get instructor: {e}"),
        ))),
    }
}
