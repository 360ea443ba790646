pub mod available;
pub mod create;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::instructors::requests::CreateInstructorRequest;
use crate::storage::Storage;

pub struct InstructorService {
    storage: Option<Arc<dyn Storage>>,
}

impl InstructorService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_instructor(
        &self,
        instructor_data: CreateInstructorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_instructor(self, instructor_data, request).await
    }

    pub async fn get_instructor_by_name(
        &self,
        name: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_instructor_by_name(self, name, request).await
    }

    pub async fn list_instructors(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_instructors(self, request).await
    }

    // 按时间段筛选可授课教师
    pub async fn list_available_instructors(
        &self,
        time_slot: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        available::list_available_instructors(self, time_slot, request).await
    }
}
