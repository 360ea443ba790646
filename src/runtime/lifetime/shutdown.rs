use tokio::signal;
use tracing::{error, warn};

/// 等待 Ctrl+C，收到后返回以便主循环停止服务
pub async fn listen_for_shutdown() {
    if let Err(e) = signal::ctrl_c().await {
        // 无法监听信号时永不返回，交由服务器自身退出
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    warn!("Shutdown signal received, stopping timetable server...");
}
