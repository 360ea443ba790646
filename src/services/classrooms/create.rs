use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode, classrooms::requests::CreateClassroomRequest};

pub async fn create_classroom(
    service: &ClassroomService,
    classroom_data: CreateClassroomRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if classroom_data.name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidPayload,
            "Ensure 'name' is provided.",
        )));
    }

    if i64::try_from(classroom_data.capacity).is_err() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidPayload,
            format!("'capacity' must not exceed {}.", i64::MAX),
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_classroom(classroom_data).await {
        Ok(classroom) => {
            info!("Classroom {} ({}) created", classroom.name, classroom.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                classroom,
                "Classroom created successfully",
            )))
        }
        Err(e) => {
            error!("Classroom creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClassroomCreationFailed,
                format!("Classroom creation failed: {e}"),
            )))
        }
    }
}
