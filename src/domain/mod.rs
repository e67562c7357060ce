//! 领域模型模块
//!
//! 纯数据结构，每个请求构造一次后立即序列化

pub mod reality;
pub mod service;
pub mod system;
pub mod traffic;

pub use reality::RealityConfig;
pub use service::ServiceStatus;
pub use system::SystemInfo;
pub use traffic::TrafficSummary;
