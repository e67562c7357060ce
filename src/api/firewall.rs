//! 防火墙 API
//!
//! 规则查询与端口放行均未实现，返回固定内容

use serde_json::{json, Value};

use crate::api::response::JsonResponse;
use crate::api::{placeholder, placeholder_success};

/// 防火墙规则（HTTP 面板）
///
/// GET /api/firewall/rules
/// 规则查询尚未实现，返回空列表
pub async fn firewall_rules() -> JsonResponse<Value> {
    placeholder("firewall/rules", json!([]))
}

/// 已放行端口（HTTPS 面板）
///
/// GET /api/firewall/list
pub async fn list_ports() -> JsonResponse<Value> {
    placeholder("firewall/list", json!({ "ports": [22, 52368, 8443] }))
}

/// POST /api/firewall/open
pub async fn open_port() -> JsonResponse<Value> {
    placeholder_success("firewall/open")
}

/// POST /api/firewall/close
pub async fn close_port() -> JsonResponse<Value> {
    placeholder_success("firewall/close")
}
