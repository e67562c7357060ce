//! 监听与服务
//!
//! - `plain`：HTTP，基于 `axum::serve`
//! - `tls`：HTTPS，rustls + hyper 连接循环，带读/写/空闲超时

pub mod plain;
pub mod tls;
