use serde::Deserialize;

// 创建课程请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub duration_years: u64,
    #[serde(default)]
    pub required_equipment: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}
