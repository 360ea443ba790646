pub mod classrooms;

pub mod courses;

pub mod instructors;

pub mod system;

pub mod timetables;

pub mod users;

pub use classrooms::configure_classroom_routes;
pub use courses::configure_course_routes;
pub use instructors::configure_instructor_routes;
pub use system::configure_system_routes;
pub use timetables::configure_timetable_routes;
pub use users::configure_user_routes;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use actix_web::web;

    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    /// 每个测试独立的内存数据库
    pub(crate) async fn memory_storage() -> web::Data<Arc<dyn Storage>> {
        let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::new_in_memory().await);
        web::Data::new(storage)
    }

    /// 从响应体中取出 `data` 字段
    pub(crate) fn data_of(body: &serde_json::Value) -> &serde_json::Value {
        &body["data"]
    }
}
