//! 系统信息领域模型

use serde::Serialize;

/// 主机基本信息
#[derive(Clone, Debug, Serialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub os: String,
    pub arch: String,
    pub cpus: usize,
    /// 面板进程运行时长（秒）
    #[serde(rename = "uptime_seconds")]
    pub uptime: f64,
}
