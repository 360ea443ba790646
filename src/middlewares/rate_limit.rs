/*!
 * 速率限制中间件
 *
 * 此中间件用于限制请求频率，防止批量写入接口被滥用。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::rate_limit::RateLimit;
 *
 * App::new()
 *     .service(
 *         web::scope("/api/v1/timetables")
 *             .wrap(RateLimit::new(10, 60))  // 10次/分钟
 *             .route("/auto", web::post().to(auto_handler))
 *     )
 * ```
 *
 * ## 限制规则
 *
 * - 使用客户端 IP 作为限制键，只有配置信任代理时才读取转发头
 * - 计数在缓存内原子更新，并发请求共享同一窗口
 * - 固定窗口计数，窗口从该键第一次请求开始
 * - 超过限制返回 429 Too Many Requests
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::{CONTENT_TYPE, HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::Expiry;
use moka::future::Cache;
use moka::ops::compute::{CompResult, Op};
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::client_address;

/// 窗口计数
#[derive(Clone, Copy)]
struct WindowCounter {
    count: u32,
    window_secs: u64,
}

/// 按窗口长度设置条目过期时间
struct WindowExpiry;

impl Expiry<String, WindowCounter> for WindowExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &WindowCounter,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(Duration::from_secs(value.window_secs))
    }
}

/// 全局速率限制缓存
/// 键: 前缀:ip:地址，值: 当前窗口请求计数
static RATE_LIMIT_CACHE: Lazy<Cache<String, WindowCounter>> = Lazy::new(|| {
    Cache::builder()
        .expire_after(WindowExpiry)
        .max_capacity(100_000)
        .build()
});

/// 速率限制配置
#[derive(Clone)]
pub struct RateLimit {
    /// 时间窗口内允许的最大请求数
    max_requests: u32,
    /// 时间窗口（秒）
    window_secs: u64,
    /// 限制键前缀（用于区分不同端点）
    key_prefix: String,
    /// 是否按代理头识别客户端
    trust_proxy_headers: bool,
}

impl RateLimit {
    /// 创建新的速率限制器
    ///
    /// # 参数
    /// - `max_requests`: 时间窗口内允许的最大请求数
    /// - `window_secs`: 时间窗口（秒）
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix: String::new(),
            trust_proxy_headers: false,
        }
    }

    /// 设置限制键前缀
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 部署在可信反向代理之后时启用
    pub fn with_trusted_proxy_headers(mut self, trust: bool) -> Self {
        self.trust_proxy_headers = trust;
        self
    }

    /// 自动生成课表接口限制（读取配置）
    pub fn timetable_generation() -> Self {
        let config = AppConfig::get();
        Self::new(
            config.timetable.auto_generate_max_requests,
            config.timetable.auto_generate_window,
        )
        .with_prefix("auto_timetable")
        .with_trusted_proxy_headers(config.server.trust_proxy_headers)
    }
}

/// 构建限制键：前缀:ip:地址
fn rate_limit_key(req: &ServiceRequest, prefix: &str, trust_proxy_headers: bool) -> String {
    let client = {
        let conn = req.connection_info();
        client_address(conn.realip_remote_addr(), req.peer_addr(), trust_proxy_headers)
    };
    let identifier = format!("ip:{}", client.as_deref().unwrap_or("unknown"));

    if prefix.is_empty() {
        identifier
    } else {
        format!("{prefix}:{identifier}")
    }
}

/// 在窗口内原子地占用一次配额
///
/// 返回 `Ok(本次之后的计数)`，超限时返回 `Err(当前计数)`。
async fn acquire_slot(cache_key: String, max_requests: u32, window_secs: u64) -> Result<u32, u32> {
    let result = RATE_LIMIT_CACHE
        .entry(cache_key)
        .and_compute_with(|entry| {
            let op = match entry.map(|e| e.into_value()) {
                Some(counter) if counter.count >= max_requests => Op::Nop,
                // 更新不会重置过期时间，窗口起点保持不变
                Some(counter) => Op::Put(WindowCounter {
                    count: counter.count + 1,
                    ..counter
                }),
                None => Op::Put(WindowCounter {
                    count: 1,
                    window_secs,
                }),
            };
            ready(op)
        })
        .await;

    match result {
        CompResult::Inserted(entry) | CompResult::ReplacedWith(entry) => {
            Ok(entry.into_value().count)
        }
        CompResult::Unchanged(entry) => Err(entry.into_value().count),
        CompResult::StillNone(_) | CompResult::Removed(_) => Err(max_requests),
    }
}

/// 创建速率限制错误响应
fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let max_requests = self.limit.max_requests;
        let window_secs = self.limit.window_secs;
        let cache_key = rate_limit_key(
            &req,
            &self.limit.key_prefix,
            self.limit.trust_proxy_headers,
        );

        Box::pin(async move {
            let count = match acquire_slot(cache_key.clone(), max_requests, window_secs).await {
                Ok(count) => count,
                Err(current) => {
                    warn!(
                        "Rate limit exceeded for key: {} (count: {}/{})",
                        cache_key, current, max_requests
                    );
                    return Ok(req.into_response(
                        create_rate_limit_response(window_secs).map_into_right_body(),
                    ));
                }
            };

            // 继续处理请求，并附加速率限制头
            let remaining = max_requests.saturating_sub(count);
            let mut res = srv.call(req).await?;
            let headers = res.headers_mut();
            headers.insert(
                HeaderName::from_static("x-ratelimit-limit"),
                HeaderValue::from(max_requests),
            );
            headers.insert(
                HeaderName::from_static("x-ratelimit-remaining"),
                HeaderValue::from(remaining),
            );
            Ok(res.map_into_left_body())
        })
    }
}
