use super::entities::Timetable;
use serde::Serialize;

// 课表列表响应
#[derive(Debug, Serialize)]
pub struct TimetableListResponse {
    pub items: Vec<Timetable>,
}
