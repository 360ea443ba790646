use serde::{Deserialize, Serialize};

use crate::models::{ErrorCode, ResultCategory};

// 统一的API响应结构
// category 由 code 推导，客户端可直接按分类处理
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub category: ResultCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            category: ErrorCode::Success.category(),
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            category: code.category(),
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_on_the_wire() {
        let ok = serde_json::to_value(ApiResponse::success(1, "ok")).unwrap();
        assert_eq!(ok["category"], "success");
        assert_eq!(ok["data"], 1);

        let missing = serde_json::to_value(ApiResponse::error_empty(
            ErrorCode::ClassroomNotFound,
            "No classrooms found.",
        ))
        .unwrap();
        assert_eq!(missing["category"], "not_found");
        assert_eq!(missing["code"], 5004);
        assert!(missing.get("data").is_none());

        let invalid = serde_json::to_value(ApiResponse::error_empty(
            ErrorCode::InvalidPayload,
            "Ensure 'name' is provided.",
        ))
        .unwrap();
        assert_eq!(invalid["category"], "invalid_payload");
    }
}
