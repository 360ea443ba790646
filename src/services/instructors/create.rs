use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::InstructorService;
use crate::models::{ApiResponse, ErrorCode, instructors::requests::CreateInstructorRequest};

pub async fn create_instructor(
    service: &InstructorService,
    instructor_data: CreateInstructorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if instructor_data.name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidPayload,
            "Ensure 'name' is provided.",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_instructor(instructor_data).await {
        Ok(instructor) => {
            info!("Instructor {} ({}) created", instructor.name, instructor.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                instructor,
                "Instructor created successfully",
            )))
        }
        Err(e) => {
            error!("Instructor creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InstructorCreationFailed,
                format!("Instructor creation failed: {e}"),
            )))
        }
    }
}
