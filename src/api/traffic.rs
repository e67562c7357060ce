//! 流量 API
//!
//! 尚未接入 sing-box 统计接口，所有端点返回固定内容

use serde_json::{json, Value};

use crate::api::response::JsonResponse;
use crate::api::{placeholder, placeholder_success};
use crate::domain::TrafficSummary;

/// GET /api/traffic/summary
pub async fn traffic_summary() -> JsonResponse<TrafficSummary> {
    tracing::debug!(endpoint = "traffic/summary", "Serving placeholder payload");
    JsonResponse::ok(TrafficSummary::default())
}

/// GET /api/traffic/info
pub async fn traffic_info() -> JsonResponse<Value> {
    placeholder(
        "traffic/info",
        json!({ "upload": 0, "download": 0, "last_update": "" }),
    )
}

/// POST /api/traffic/reset
pub async fn reset_traffic() -> JsonResponse<Value> {
    placeholder_success("traffic/reset")
}
