use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode, classrooms::responses::ClassroomListResponse};

pub async fn list_classrooms(
    service: &ClassroomService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_classrooms().await {
        Ok(items) if items.is_empty() => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::ClassroomNotFound, "No classrooms found."),
        )),
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ClassroomListResponse { items },
            "Classroom list retrieved successfully",
        ))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Failed to retrieve classroom list: {e}"),
        ))),
    }
}
