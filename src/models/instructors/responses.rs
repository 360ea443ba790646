use super::entities::Instructor;
use serde::Serialize;

// 教师列表响应
#[derive(Debug, Serialize)]
pub struct InstructorListResponse {
    pub items: Vec<Instructor>,
}
