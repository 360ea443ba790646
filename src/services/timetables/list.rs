use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TimetableService;
use crate::models::{ApiResponse, ErrorCode, timetables::responses::TimetableListResponse};

pub async fn list_timetables(
    service: &TimetableService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_timetables().await {
        Ok(items) if items.is_empty() => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::TimetableNotFound, "No timetables found."),
        )),
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TimetableListResponse { items },
            "Timetable list retrieved successfully",
        ))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Failed to retrieve timetable list: {e}"),
        ))),
    }
}
