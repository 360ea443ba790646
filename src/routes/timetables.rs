use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RateLimit;
use crate::models::timetables::requests::CreateTimetableRequest;
use crate::services::TimetableService;

// 懒加载的全局 TimetableService 实例
static TIMETABLE_SERVICE: Lazy<TimetableService> = Lazy::new(TimetableService::new_lazy);

pub async fn list_timetables(req: HttpRequest) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.list_timetables(&req).await
}

pub async fn create_timetable(
    req: HttpRequest,
    timetable_data: web::Json<CreateTimetableRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .create_timetable(timetable_data.into_inner(), &req)
        .await
}

pub async fn create_auto_timetable(req: HttpRequest) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.create_auto_timetable(&req).await
}

// 配置路由
pub fn configure_timetable_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/timetables")
            .route("", web::get().to(list_timetables))
            .route("", web::post().to(create_timetable))
            .service(
                web::resource("/auto")
                    .wrap(RateLimit::timetable_generation())
                    .route(web::post().to(create_auto_timetable)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::json;

    use super::*;
    use crate::routes::test_support::{data_of, memory_storage};
    use crate::routes::{
        configure_classroom_routes, configure_course_routes, configure_instructor_routes,
    };

    #[actix_web::test]
    async fn test_manual_timetable() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_timetable_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/timetables")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "No timetables found.");

        let req = test::TestRequest::post()
            .uri("/api/v1/timetables")
            .set_json(json!({"course_id": "c1", "instructor_id": "i1"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Ensure 'course_id', 'instructor_id', and 'classroom_id' are provided."
        );

        // 引用不存在的记录也可以写入
        let req = test::TestRequest::post()
            .uri("/api/v1/timetables")
            .set_json(json!({
                "course_id": "missing-course",
                "instructor_id": "missing-instructor",
                "classroom_id": "missing-classroom",
                "time_slot": "13:00-15:00"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get()
            .uri("/api/v1/timetables")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(data_of(&body)["items"][0]["time_slot"], "13:00-15:00");
    }

    #[actix_web::test]
    async fn test_auto_timetable_generates_cross_product() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_course_routes)
                .configure(configure_instructor_routes)
                .configure(configure_classroom_routes)
                .configure(configure_timetable_routes),
        )
        .await;

        // 任一集合为空时生成空列表
        let req = test::TestRequest::post()
            .uri("/api/v1/timetables/auto")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(data_of(&body)["items"].as_array().unwrap().is_empty());

        for name in ["Algebra", "Biology"] {
            let req = test::TestRequest::post()
                .uri("/api/v1/courses")
                .set_json(json!({"name": name, "duration_years": 1}))
                .to_request();
            test::call_service(&app, req).await;
        }
        for name in ["Turing", "Hopper", "Lovelace"] {
            let req = test::TestRequest::post()
                .uri("/api/v1/instructors")
                .set_json(json!({"name": name}))
                .to_request();
            test::call_service(&app, req).await;
        }
        let req = test::TestRequest::post()
            .uri("/api/v1/classrooms")
            .set_json(json!({"name": "A101", "capacity": 40}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/timetables/auto")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert!(resp.headers().contains_key("x-ratelimit-remaining"));
        let body: serde_json::Value = test::read_body_json(resp).await;
        let items = data_of(&body)["items"].as_array().unwrap();
        assert_eq!(items.len(), 2 * 3);
        assert!(items.iter().all(|t| t["time_slot"] == "08:00-10:00"));

        let req = test::TestRequest::get()
            .uri("/api/v1/timetables")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(data_of(&body)["items"].as_array().unwrap().len(), 6);
    }
}
