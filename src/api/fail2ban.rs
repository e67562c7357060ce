//! Fail2ban API（占位）
//!
//! 未调用 fail2ban-client

use serde_json::{json, Value};

use crate::api::response::JsonResponse;
use crate::api::{placeholder, placeholder_success};

/// GET /api/fail2ban/status
pub async fn fail2ban_status() -> JsonResponse<Value> {
    placeholder("fail2ban/status", json!({ "status": "running" }))
}

/// GET /api/fail2ban/jails
pub async fn list_jails() -> JsonResponse<Value> {
    placeholder("fail2ban/jails", json!({ "jails": ["sshd", "nginx-http-auth"] }))
}

/// 解封 IP，参数被忽略
///
/// POST /api/fail2ban/unban
pub async fn unban_ip() -> JsonResponse<Value> {
    placeholder_success("fail2ban/unban")
}
