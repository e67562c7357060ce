//! 日志 API
//!
//! 包含 /api/logs/* 端点

use axum::extract::State;
use serde_json::{json, Value};

use crate::api::response::JsonResponse;
use crate::api::{placeholder, NameQuery};
use crate::error::ApiResult;
use crate::services::systemd;
use crate::state::PanelState;

/// 获取 systemd 服务日志
///
/// GET /api/logs/systemd?name=
///
/// 通过 `journalctl -u <name> -n 200 --no-pager` 获取
pub async fn systemd_logs(
    State(state): State<PanelState>,
    query: NameQuery,
) -> ApiResult<JsonResponse<Value>> {
    let service = query.require()?;
    tracing::debug!(service = %service, "Fetching systemd logs");

    let lines = systemd::journal_lines(state.runner.as_ref(), &service).await?;

    Ok(JsonResponse::ok(json!({
        "service": service,
        "lines": lines,
    })))
}

/// GET /api/logs/singbox（占位）
pub async fn singbox_logs() -> JsonResponse<Value> {
    placeholder("logs/singbox", json!({ "lines": [] }))
}

/// GET /api/logs/fail2ban（占位）
pub async fn fail2ban_logs() -> JsonResponse<Value> {
    placeholder("logs/fail2ban", json!({ "lines": [] }))
}
