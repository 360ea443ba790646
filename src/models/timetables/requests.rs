use serde::Deserialize;

// 创建课表请求
#[derive(Debug, Deserialize)]
pub struct CreateTimetableRequest {
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub instructor_id: String,
    #[serde(default)]
    pub classroom_id: String,
    #[serde(default)]
    pub time_slot: String,
}
