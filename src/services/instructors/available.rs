use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::InstructorService;
use crate::models::{ApiResponse, ErrorCode, instructors::responses::InstructorListResponse};

pub async fn list_available_instructors(
    service: &InstructorService,
    time_slot: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_available_instructors(time_slot).await {
        Ok(items) if items.is_empty() => {
            debug!("No instructor available at {}", time_slot);
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::InstructorNotFound,
                "No instructors found.",
            )))
        }
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            InstructorListResponse { items },
            "Available instructors retrieved successfully",
        ))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Failed to retrieve available instructors: {e}"),
        ))),
    }
}
