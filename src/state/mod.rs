//! 运行时状态模块
//!
//! 面板只有只读状态：命令执行器与进程启动时刻

pub mod app_state;

pub use app_state::PanelState;
