use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TimetableService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode, timetables::responses::TimetableListResponse};

pub async fn create_auto_timetable(
    service: &TimetableService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let time_slot = &AppConfig::get().timetable.default_time_slot;
    let storage = service.get_storage(request);

    match storage.generate_timetables(time_slot).await {
        Ok(items) => {
            info!("Generated {} timetable entries at {}", items.len(), time_slot);
            // 任一集合为空时返回空列表
            Ok(HttpResponse::Created().json(ApiResponse::success(
                TimetableListResponse { items },
                "Timetables generated successfully",
            )))
        }
        Err(e) => {
            error!("Timetable generation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::TimetableGenerationFailed,
                format!("Timetable generation failed: {e}"),
            )))
        }
    }
}
