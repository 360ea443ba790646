pub mod auto;
pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::timetables::requests::CreateTimetableRequest;
use crate::storage::Storage;

pub struct TimetableService {
    storage: Option<Arc<dyn Storage>>,
}

impl TimetableService {
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

    pub async fn create_timetable(
        &self,
        timetable_data: CreateTimetableRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_timetable(self, timetable_data, request).await
    }

    pub async fn list_timetables(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_timetables(self, request).await
    }

    // 自动生成全部组合的课表
    pub async fn create_auto_timetable(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        auto::create_auto_timetable(self, request).await
    }
}
