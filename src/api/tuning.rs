//! 网络调优 API：BBR 与 IPv4/IPv6 优先级（占位）

use serde_json::{json, Value};

use crate::api::response::JsonResponse;
use crate::api::{placeholder, placeholder_success};

/// GET /api/bbr/status
pub async fn bbr_status() -> JsonResponse<Value> {
    placeholder("bbr/status", json!({ "enabled": true }))
}

/// POST /api/bbr/enable
pub async fn enable_bbr() -> JsonResponse<Value> {
    placeholder_success("bbr/enable")
}

/// GET /api/network/priority
pub async fn network_priority() -> JsonResponse<Value> {
    placeholder("network/priority", json!({ "mode": "ipv4" }))
}

/// POST /api/network/set
pub async fn set_network_priority() -> JsonResponse<Value> {
    placeholder_success("network/set")
}
