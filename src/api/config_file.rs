//! 面板配置文件 API（占位）
//!
//! config.json 的读写尚未实现

use serde_json::{json, Value};

use crate::api::response::JsonResponse;
use crate::api::{placeholder, placeholder_success};

/// GET /api/config/view
pub async fn view_config() -> JsonResponse<Value> {
    placeholder("config/view", json!({ "content": "{}" }))
}

/// POST /api/config/save
pub async fn save_config() -> JsonResponse<Value> {
    placeholder_success("config/save")
}
