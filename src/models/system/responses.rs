use serde::Serialize;

// 系统信息响应
#[derive(Debug, Serialize)]
pub struct SystemInfoResponse {
    pub system_name: String, // 系统名称
    pub version: String,     // 程序版本
    pub environment: String, // 运行环境
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub uptime_seconds: i64,
}
