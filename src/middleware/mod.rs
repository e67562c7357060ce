//! 中间件模块

pub mod access_log;

pub use access_log::access_log;
