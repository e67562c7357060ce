//! 主机操作模块
//!
//! 在命令执行器之上实现的服务查询/操作

pub mod host;
pub mod systemd;
