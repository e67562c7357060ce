//! 命令行参数

use clap::Parser;
use std::path::PathBuf;

/// Init Panel - 主机管理面板（HTTP）
#[derive(Parser, Debug, Clone)]
#[command(name = "init-panel", version, about, long_about = None)]
pub struct PlainPanelArgs {
    /// 前端静态文件目录
    #[arg(long = "web-dir", default_value = "./web")]
    pub web_dir: PathBuf,

    /// HTTP 监听端口
    #[arg(long, default_value_t = 80)]
    pub port: u16,

    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Reality Panel - 主机管理面板（HTTPS）
#[derive(Parser, Debug, Clone)]
#[command(name = "reality-panel", version, about, long_about = None)]
pub struct TlsPanelArgs {
    /// TLS 证书文件
    #[arg(long, default_value = "/opt/reality-panel/certs/panel.crt")]
    pub cert: PathBuf,

    /// TLS 私钥文件
    #[arg(long, default_value = "/opt/reality-panel/certs/panel.key")]
    pub key: PathBuf,

    /// 前端静态文件目录
    #[arg(long, default_value = "/opt/reality-panel/web")]
    pub web: PathBuf,

    /// 监听地址（`host:port`），`:8443` 表示所有 IPv4 网卡
    #[arg(long, default_value = ":8443")]
    pub addr: String,

    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
