use serde::{Deserialize, Serialize};

// 教室实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Classroom {
    pub id: String,
    pub name: String,
    pub capacity: u64,
    pub equipment: String,
}
