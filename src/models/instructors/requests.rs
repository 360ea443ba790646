use serde::Deserialize;

// 创建教师请求
#[derive(Debug, Deserialize)]
pub struct CreateInstructorRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub preferred_times: Vec<String>,
}

// 可用教师查询参数
#[derive(Debug, Deserialize)]
pub struct AvailableInstructorsQuery {
    pub time_slot: String,
}
