use serde::{Deserialize, Serialize};

/// 响应结果分类
///
/// 每个接口调用只会落入其中一类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCategory {
    Success,
    Error,
    NotFound,
    InvalidPayload,
}

/// API 错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用 1xxx
    InvalidPayload = 1001,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    // 用户 2xxx
    UserEmailInvalid = 2001,
    UserPasswordInvalid = 2002,
    UserEmailAlreadyExists = 2003,
    UserNotFound = 2004,
    UserCreationFailed = 2005,
    UserUpdateFailed = 2006,

    // 课程 3xxx
    CourseNotFound = 3004,
    CourseCreationFailed = 3005,

    // 教师 4xxx
    InstructorNotFound = 4004,
    InstructorCreationFailed = 4005,

    // 教室 5xxx
    ClassroomNotFound = 5004,
    ClassroomCreationFailed = 5005,

    // 课表 6xxx
    TimetableNotFound = 6004,
    TimetableCreationFailed = 6005,
    TimetableGenerationFailed = 6006,
}

impl ErrorCode {
    /// 错误码所属分类
    pub fn category(self) -> ResultCategory {
        match self {
            ErrorCode::Success => ResultCategory::Success,
            ErrorCode::InvalidPayload => ResultCategory::InvalidPayload,
            ErrorCode::UserNotFound
            | ErrorCode::CourseNotFound
            | ErrorCode::InstructorNotFound
            | ErrorCode::ClassroomNotFound
            | ErrorCode::TimetableNotFound => ResultCategory::NotFound,
            _ => ResultCategory::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_codes() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::InvalidPayload as i32, 1001);
        assert_eq!(ErrorCode::UserNotFound as i32, 2004);
        assert_eq!(ErrorCode::TimetableGenerationFailed as i32, 6006);
    }

    #[test]
    fn test_categories() {
        assert_eq!(ErrorCode::Success.category(), ResultCategory::Success);
        assert_eq!(
            ErrorCode::InvalidPayload.category(),
            ResultCategory::InvalidPayload
        );
        assert_eq!(
            ErrorCode::CourseNotFound.category(),
            ResultCategory::NotFound
        );
        assert_eq!(
            ErrorCode::UserEmailAlreadyExists.category(),
            ResultCategory::Error
        );
        assert_eq!(
            ErrorCode::RateLimitExceeded.category(),
            ResultCategory::Error
        );
    }
}
