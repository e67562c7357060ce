//! 配置模块
//!
//! 命令行参数解析与启动校验，无环境变量配置

pub mod cli;
pub mod panel;

pub use cli::{PlainPanelArgs, TlsPanelArgs};
pub use panel::{parse_listen_addr, PlainPanelConfig, TlsPanelConfig};

/// 常量
pub mod constants {
    use std::time::Duration;

    /// 读取超时（TLS 握手 + 请求头）
    pub const READ_TIMEOUT: Duration = Duration::from_secs(10);

    /// 写超时（handler 产生响应的时限）
    pub const WRITE_TIMEOUT: Duration = Duration::from_secs(30);

    /// 空闲连接超时
    pub const IDLE_TIMEOUT: Duration = Duration::from_secs(60);

    /// journalctl 返回的行数
    pub const JOURNAL_LINES: u32 = 200;

    /// 版本号
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
