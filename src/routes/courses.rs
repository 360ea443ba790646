use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::courses::requests::CreateCourseRequest;
use crate::services::CourseService;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn get_course_by_name(
    req: HttpRequest,
    name: web::Path<String>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course_by_name(&name, &req).await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/name/{name}", web::get().to(get_course_by_name)),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::json;

    use super::*;
    use crate::models::ErrorCode;
    use crate::routes::test_support::{data_of, memory_storage};

    #[actix_web::test]
    async fn test_course_flow() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_course_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/courses").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "No courses found.");

        let req = test::TestRequest::post()
            .uri("/api/v1/courses")
            .set_json(json!({
                "name": "Algebra",
                "duration_years": 2,
                "required_equipment": "projector",
                "prerequisites": ["Arithmetic"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(data_of(&body)["duration_years"], 2);
        assert_eq!(data_of(&body)["prerequisites"], json!(["Arithmetic"]));

        let req = test::TestRequest::get()
            .uri("/api/v1/courses/name/Algebra")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(data_of(&body)["required_equipment"], "projector");

        let req = test::TestRequest::get()
            .uri("/api/v1/courses/name/Geometry")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Course with name Geometry not found.");

        let req = test::TestRequest::get().uri("/api/v1/courses").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(data_of(&body)["items"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_create_course_requires_name() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_course_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/courses")
            .set_json(json!({"duration_years": 3}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Ensure 'name' and 'duration_years' are provided."
        );
    }

    #[actix_web::test]
    async fn test_create_course_rejects_oversized_duration() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_course_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/courses")
            .set_json(json!({"name": "Big", "duration_years": 9223372036854775808u64}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::InvalidPayload as i32);

        // 边界值可以写入
        let req = test::TestRequest::post()
            .uri("/api/v1/courses")
            .set_json(json!({"name": "Long", "duration_years": i64::MAX as u64}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }
}
