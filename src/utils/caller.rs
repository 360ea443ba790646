use std::net::SocketAddr;

use actix_web::HttpRequest;

use crate::config::AppConfig;

/// 无法识别调用方时使用的标识
pub const ANONYMOUS_CALLER: &str = "anonymous";

/// 解析客户端地址
///
/// 仅在 `trust_proxy_headers` 为真时采用代理头（Forwarded / X-Forwarded-For）
/// 给出的地址，否则只认 TCP 对端地址。
pub fn client_address(
    forwarded: Option<&str>,
    peer: Option<SocketAddr>,
    trust_proxy_headers: bool,
) -> Option<String> {
    if trust_proxy_headers && let Some(addr) = forwarded {
        return Some(addr.to_string());
    }
    peer.map(|addr| addr.ip().to_string())
}

/// 获取调用方标识
///
/// 不做身份认证，使用客户端地址作为标识。
pub fn caller_identity(request: &HttpRequest) -> String {
    let trust_proxy_headers = AppConfig::get().server.trust_proxy_headers;
    let conn = request.connection_info();
    client_address(
        conn.realip_remote_addr(),
        request.peer_addr(),
        trust_proxy_headers,
    )
    .unwrap_or_else(|| ANONYMOUS_CALLER.to_string())
}
