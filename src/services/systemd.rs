//! systemd 服务管理
//!
//! 通过 `systemctl` / `journalctl` 查询与操作服务

use tracing::{info, warn};

use crate::config::constants::JOURNAL_LINES;
use crate::domain::ServiceStatus;
use crate::infra::{CommandError, CommandExecutor};

/// 查询服务是否处于 active 状态
///
/// `systemctl is-active` 对非 active 服务返回非零退出码，这里不视为错误，
/// 而是报告 `active = false` 并附带命令输出。只有这一处吞掉命令失败。
pub async fn service_status(runner: &dyn CommandExecutor, name: &str) -> ServiceStatus {
    match runner.run("systemctl", &["is-active", name]).await {
        Ok(out) => {
            let raw = out.trim().to_string();
            ServiceStatus {
                name: name.to_string(),
                active: raw == "active",
                raw,
            }
        }
        Err(e) => {
            if let CommandError::SpawnFailed { .. } = e {
                warn!(service = %name, error = %e, "systemctl could not be started");
            }
            ServiceStatus {
                name: name.to_string(),
                active: false,
                raw: e.output_text(),
            }
        }
    }
}

/// 重启服务
pub async fn restart_service(runner: &dyn CommandExecutor, name: &str) -> Result<(), CommandError> {
    info!(service = %name, "Restarting service");
    runner.run("systemctl", &["restart", name]).await?;
    info!(service = %name, "Service restarted");
    Ok(())
}

/// 获取服务最近的 journal 日志
pub async fn journal_lines(
    runner: &dyn CommandExecutor,
    name: &str,
) -> Result<Vec<String>, CommandError> {
    let limit = JOURNAL_LINES.to_string();
    runner
        .run_lines("journalctl", &["-u", name, "-n", &limit, "--no-pager"])
        .await
}
