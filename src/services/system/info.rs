use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::models::{AppStartTime, ApiResponse, ErrorCode, system::responses::SystemInfoResponse};

pub async fn get_system_info(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(start_time) = request.app_data::<web::Data<AppStartTime>>() else {
        return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            "Start time is not available",
        )));
    };

    let config = service.get_config();
    let started_at = start_time.start_datetime;
    let uptime_seconds = (chrono::Utc::now() - started_at).num_seconds().max(0);

    let response = SystemInfoResponse {
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        started_at,
        uptime_seconds,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "System information retrieved successfully",
    )))
}
