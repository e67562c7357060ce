//! Reality Panel - 单机 Reality/sing-box 管理面板
//!
//! 两种运行形态：
//! - `init-panel`：HTTP，最小路由表 + 静态前端
//! - `reality-panel`：HTTPS，完整路由表 + 访问日志 + 连接超时

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod middleware;
pub mod server;
pub mod services;
pub mod state;

use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{PlainPanelArgs, PlainPanelConfig, TlsPanelArgs, TlsPanelConfig};
use crate::error::StartupError;
use crate::server::tls::ConnectionTimeouts;
use crate::state::PanelState;

/// 初始化日志，`RUST_LOG` 优先于命令行给出的级别
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// 启动 HTTP 面板并阻塞服务
pub async fn run_plain_panel(args: PlainPanelArgs, started_at: Instant) -> Result<(), StartupError> {
    let config = PlainPanelConfig::from_args(&args)?;

    info!(
        version = crate::config::constants::VERSION,
        port = config.listen.port(),
        web_dir = %config.web_dir.display(),
        "Init Panel starting"
    );

    let app = api::plain_app(PanelState::system(started_at), &config.web_dir);
    server::plain::serve(app, config.listen).await
}

/// 启动 HTTPS 面板并阻塞服务
pub async fn run_tls_panel(args: TlsPanelArgs, started_at: Instant) -> Result<(), StartupError> {
    let config = TlsPanelConfig::from_args(&args)?;
    let tls = server::tls::load_tls_config(&config.cert, &config.key)?;

    info!(
        version = crate::config::constants::VERSION,
        addr = %config.listen,
        "Reality Panel starting: https://{}",
        config.listen
    );
    info!(cert = %config.cert.display(), "Using certificate");
    info!(web_dir = %config.web_dir.display(), "Serving web directory");

    let app = api::tls_app(PanelState::system(started_at), &config.web_dir);
    server::tls::serve(app, config.listen, tls, ConnectionTimeouts::default()).await
}
