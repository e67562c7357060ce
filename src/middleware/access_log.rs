//! 访问日志中间件
//!
//! 每个请求处理完后记录开始时间、远端地址、方法、路径与状态码

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::time::Instant;

/// 远端地址通过 `ConnectInfo` 注入；缺失时记为 `-`
pub async fn access_log(
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let started = chrono::Local::now();
    let timer = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let remote = connect_info
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());

    let response = next.run(request).await;

    tracing::info!(
        target: "access",
        started = %started.format("%Y-%m-%d %H:%M:%S"),
        remote = %remote,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "{} {} {}",
        remote,
        method,
        path
    );

    response
}
