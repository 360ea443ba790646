use super::entities::Classroom;
use serde::Serialize;

// 教室列表响应
#[derive(Debug, Serialize)]
pub struct ClassroomListResponse {
    pub items: Vec<Classroom>,
}
