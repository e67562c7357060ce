//! 存活检查
//!
//! GET /api/ping，无需任何依赖

use serde_json::{json, Value};

use crate::api::response::JsonResponse;

/// GET /api/ping
pub async fn ping() -> JsonResponse<Value> {
    JsonResponse::ok(json!({ "msg": "pong" }))
}
