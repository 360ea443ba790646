use serde::{Deserialize, Serialize};

// 课表条目
// course_id / instructor_id / classroom_id 仅为引用，不保证对应记录存在
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Timetable {
    pub id: String,
    pub course_id: String,
    pub instructor_id: String,
    pub classroom_id: String,
    pub time_slot: String,
}
