use serde::Deserialize;

// 创建教室请求
#[derive(Debug, Deserialize)]
pub struct CreateClassroomRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub capacity: u64,
    #[serde(default)]
    pub equipment: String,
}
