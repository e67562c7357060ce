//! 应用状态

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::infra::{CommandExecutor, SystemCommandRunner};

/// 面板状态，所有请求共享
///
/// 构造后不再修改，无需加锁
#[derive(Clone)]
pub struct PanelState {
    /// 外部命令执行器
    pub runner: Arc<dyn CommandExecutor>,
    /// 进程启动时刻，用于计算运行时长
    pub started_at: Instant,
}

impl PanelState {
    /// 创建新的应用状态
    pub fn new(runner: Arc<dyn CommandExecutor>, started_at: Instant) -> Self {
        Self { runner, started_at }
    }

    /// 使用真实子进程执行器
    pub fn system(started_at: Instant) -> Self {
        Self::new(Arc::new(SystemCommandRunner), started_at)
    }

    /// 自启动以来经过的时间
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl std::fmt::Debug for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelState")
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}
