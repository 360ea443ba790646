use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::instructors::requests::{AvailableInstructorsQuery, CreateInstructorRequest};
use crate::services::InstructorService;

// 懒加载的全局 InstructorService 实例
static INSTRUCTOR_SERVICE: Lazy<InstructorService> = Lazy::new(InstructorService::new_lazy);

pub async fn list_instructors(req: HttpRequest) -> ActixResult<HttpResponse> {
    INSTRUCTOR_SERVICE.list_instructors(&req).await
}

pub async fn create_instructor(
    req: HttpRequest,
    instructor_data: web::Json<CreateInstructorRequest>,
) -> ActixResult<HttpResponse> {
    INSTRUCTOR_SERVICE
        .create_instructor(instructor_data.into_inner(), &req)
        .await
}

pub async fn get_instructor_by_name(
    req: HttpRequest,
    name: web::Path<String>,
) -> ActixResult<HttpResponse> {
    INSTRUCTOR_SERVICE.get_instructor_by_name(&name, &req).await
}

pub async fn list_available_instructors(
    req: HttpRequest,
    query: web::Query<AvailableInstructorsQuery>,
) -> ActixResult<HttpResponse> {
    INSTRUCTOR_SERVICE
        .list_available_instructors(&query.time_slot, &req)
        .await
}

// 配置路由
pub fn configure_instructor_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/instructors")
            .route("", web::get().to(list_instructors))
            .route("", web::post().to(create_instructor))
            .route("/available", web::get().to(list_available_instructors))
            .route("/name/{name}", web::get().to(get_instructor_by_name)),
    );
}
