//! HTTP 监听

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::StartupError;

/// 绑定并阻塞服务，直到监听出错
pub async fn serve(app: Router, addr: SocketAddr) -> Result<(), StartupError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    info!(addr = %addr, "listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(StartupError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_failure_is_startup_error() {
        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = occupied.local_addr().unwrap();

        let err = serve(Router::new(), addr).await.unwrap_err();

        assert!(matches!(err, StartupError::Bind { addr: a, .. } if a == addr));
    }
}
