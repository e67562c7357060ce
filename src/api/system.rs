//! 系统信息 API
//!
//! 包含 /api/system/* 端点

use axum::extract::State;
use serde_json::{json, Value};

use crate::api::response::JsonResponse;
use crate::api::{placeholder, placeholder_success};
use crate::domain::SystemInfo;
use crate::services::host;
use crate::state::PanelState;

/// 获取主机信息
///
/// GET /api/system/info
///
/// `uptime_seconds` 为面板进程自身的运行时长
pub async fn system_info(State(state): State<PanelState>) -> JsonResponse<SystemInfo> {
    JsonResponse::ok(host::system_info(&state))
}

/// 时区与 swap 概况（占位）
///
/// GET /api/system/info（HTTPS 面板）
pub async fn system_overview() -> JsonResponse<Value> {
    placeholder("system/info", json!({ "timezone": "UTC", "swap": 0 }))
}

/// 设置时区（占位，未调用 timedatectl）
///
/// POST /api/system/timezone
pub async fn set_timezone() -> JsonResponse<Value> {
    placeholder_success("system/timezone")
}

/// 创建/删除 swap（占位）
///
/// POST /api/system/swap
pub async fn set_swap() -> JsonResponse<Value> {
    placeholder_success("system/swap")
}
