use serde::{Deserialize, Serialize};

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub duration_years: u64,
    pub required_equipment: String,
    pub prerequisites: Vec<String>, // 先修课程名称，不做存在性校验
}
