use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::InstructorService;
use crate::models::{ApiResponse, ErrorCode, instructors::responses::InstructorListResponse};

pub async fn list_instructors(
    service: &InstructorService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_instructors().await {
        Ok(items) if items.is_empty() => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::InstructorNotFound, "No instructors found."),
        )),
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            InstructorListResponse { items },
            "Instructor list retrieved successfully",
        ))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Failed to retrieve instructor list: {e}"),
        ))),
    }
}
