//! Reality 入站配置

use serde::Serialize;

/// Reality 入站配置
///
/// 尚未从 sing-box 配置文件读取，目前恒为默认值
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RealityConfig {
    pub listen: String,
    pub port: u16,
    pub private_key: String,
    pub public_key: String,
    pub short_id: String,
}
