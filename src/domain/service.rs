//! systemd 服务状态

use serde::Serialize;

/// `systemctl is-active` 的结果
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub name: String,
    pub active: bool,
    /// 命令原始输出（已去掉首尾空白）
    pub raw: String,
}
