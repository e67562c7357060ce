//! 服务管理 API
//!
//! 包含 /api/service/* 端点

use axum::extract::State;
use serde_json::{json, Value};

use crate::api::response::JsonResponse;
use crate::api::{placeholder, placeholder_success, NameQuery};
use crate::domain::ServiceStatus;
use crate::error::ApiResult;
use crate::services::systemd;
use crate::state::PanelState;

/// 查询服务状态
///
/// GET /api/service/status?name=
/// 服务不存在或未运行时返回 `active: false`，不报错
pub async fn service_status(
    State(state): State<PanelState>,
    query: NameQuery,
) -> ApiResult<JsonResponse<ServiceStatus>> {
    let name = query.require()?;
    let status = systemd::service_status(state.runner.as_ref(), &name).await;
    Ok(JsonResponse::ok(status))
}

/// 重启服务
///
/// POST /api/service/restart?name=
pub async fn restart_service(
    State(state): State<PanelState>,
    query: NameQuery,
) -> ApiResult<JsonResponse<Value>> {
    let name = query.require()?;
    systemd::restart_service(state.runner.as_ref(), &name).await?;
    Ok(JsonResponse::ok(json!({ "status": "ok" })))
}

/// sing-box 运行状态（占位，未调用 systemctl）
///
/// GET /api/service/status
pub async fn singbox_status() -> JsonResponse<Value> {
    placeholder("service/status", json!({ "status": "running" }))
}

/// 重启 sing-box（占位，未调用 systemctl）
///
/// POST /api/service/restart
pub async fn restart_singbox() -> JsonResponse<Value> {
    placeholder_success("service/restart")
}
