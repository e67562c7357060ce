//! 时间同步 API（占位）

use serde_json::{json, Value};

use crate::api::response::JsonResponse;
use crate::api::{placeholder, placeholder_success};

/// 当前时间与同步状态
///
/// GET /api/time/status
/// `time` 为本地时间，其余字段固定
pub async fn time_status() -> JsonResponse<Value> {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    placeholder(
        "time/status",
        json!({ "time": now, "timezone": "UTC", "ntp_active": true }),
    )
}

/// POST /api/time/sync
pub async fn sync_time() -> JsonResponse<Value> {
    placeholder_success("time/sync")
}
