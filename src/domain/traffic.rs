//! 流量统计

use serde::Serialize;

/// 出入站流量汇总
///
/// 尚未接入 sing-box 统计接口，目前恒为零
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TrafficSummary {
    pub inbound_bytes: u64,
    pub outbound_bytes: u64,
}
