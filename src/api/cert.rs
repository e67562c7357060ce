//! 证书状态 API（占位）

use serde_json::{json, Value};

use crate::api::placeholder;
use crate::api::response::JsonResponse;

/// 面板证书信息
///
/// GET /api/cert/status
/// 尚未解析 panel.crt，返回固定内容
pub async fn cert_status() -> JsonResponse<Value> {
    placeholder(
        "cert/status",
        json!({
            "issuer": "ZeroSSL",
            "valid_from": "",
            "valid_to": "",
            "days_remaining": 0,
            "ip": "",
        }),
    )
}
