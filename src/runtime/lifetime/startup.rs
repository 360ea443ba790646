use std::sync::Arc;

use tracing::{error, warn};

use crate::config::AppConfig;
use crate::errors::TimetableError;
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
/// 建立数据库连接并执行迁移
pub async fn prepare_server_startup() -> Result<StartupContext, TimetableError> {
    let config = AppConfig::get();
    warn!(
        "Connecting to database {} (pool size {})",
        config.database.url, config.database.pool_size
    );

    let storage = crate::storage::create_storage().await.map_err(|e| {
        report_startup_error(&e);
        e
    })?;
    warn!("Storage backend initialized and migrations completed");

    warn!(
        "Auto-generated timetables use time slot {}",
        config.timetable.default_time_slot
    );

    Ok(StartupContext { storage })
}

fn report_startup_error(e: &TimetableError) {
    #[cfg(debug_assertions)]
    eprintln!("{}", e.format_colored());

    error!("Failed to create storage backend: {}", e);
}
