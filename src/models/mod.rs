//! 数据模型定义
//!
//! 每个实体分为 entities（业务实体）、requests（请求载荷）、responses（响应体）。

pub mod classrooms;
pub mod common;
pub mod courses;
pub mod instructors;
pub mod system;
pub mod timetables;
pub mod users;

pub use common::{ApiResponse, ErrorCode, ResultCategory};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
