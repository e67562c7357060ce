//! 主机信息

use sysinfo::{CpuRefreshKind, RefreshKind, System};

use crate::domain::SystemInfo;
use crate::state::PanelState;

/// 收集主机信息，运行时长基于进程启动时刻计算
pub fn system_info(state: &PanelState) -> SystemInfo {
    let mut sys = System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new()));
    sys.refresh_cpu_all();

    SystemInfo {
        hostname: System::host_name().unwrap_or_default(),
        os: platform_os(std::env::consts::OS).to_string(),
        arch: platform_arch(std::env::consts::ARCH).to_string(),
        cpus: sys.cpus().len(),
        uptime: state.uptime().as_secs_f64(),
    }
}

/// 平台名沿用面板前端已有的取值（`darwin`、`amd64`、`arm64` 等）
fn platform_os(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

fn platform_arch(arch: &str) -> &str {
    match arch {
        "x86_64" => "amd64",
        "x86" => "386",
        "aarch64" => "arm64",
        "powerpc64" => "ppc64",
        "loongarch64" => "loong64",
        other => other,
    }
}
