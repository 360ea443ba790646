use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TimetableService;
use crate::models::{ApiResponse, ErrorCode, timetables::requests::CreateTimetableRequest};

pub async fn create_timetable(
    service: &TimetableService,
    timetable_data: CreateTimetableRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 只校验字段存在，不检查引用的记录
    if timetable_data.course_id.is_empty()
        || timetable_data.instructor_id.is_empty()
        || timetable_data.classroom_id.is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidPayload,
            "Ensure 'course_id', 'instructor_id', and 'classroom_id' are provided.",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_timetable(timetable_data).await {
        Ok(timetable) => {
            info!("Timetable {} created", timetable.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                timetable,
                "Timetable created successfully",
            )))
        }
        Err(e) => {
            error!("Timetable creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::TimetableCreationFailed,
                format!("Timetable creation failed: {e}"),
            )))
        }
    }
}
