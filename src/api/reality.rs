//! Reality API
//!
//! 包含 /api/reality/* 端点。配置文件读写与密钥轮换尚未实现，
//! 所有端点返回固定内容。

use serde_json::{json, Value};

use crate::api::response::JsonResponse;
use crate::api::{placeholder, placeholder_success};
use crate::domain::RealityConfig;

/// Reality 配置（HTTP 面板）
///
/// GET /api/reality/config
pub async fn reality_config() -> JsonResponse<RealityConfig> {
    tracing::debug!(endpoint = "reality/config", "Serving placeholder payload");
    JsonResponse::ok(RealityConfig::default())
}

/// Reality 入站信息（HTTPS 面板，演示数据）
///
/// GET /api/reality/info
pub async fn reality_info() -> JsonResponse<Value> {
    placeholder(
        "reality/info",
        json!({
            "listen_port": 52368,
            "server_name": "www.amd.com",
            "uuid": "demo-uuid",
            "private_key": "demo-priv",
            "public_key": "demo-pub",
            "short_id": "demo-short",
            "flow": "xtls-rprx-vision",
            "user_name": "Reality_Default",
        }),
    )
}

/// POST /api/reality/update
pub async fn update_reality() -> JsonResponse<Value> {
    placeholder_success("reality/update")
}

/// 重新生成密钥（占位，返回固定值）
///
/// POST /api/reality/reset-keys
pub async fn reset_keys() -> JsonResponse<Value> {
    placeholder(
        "reality/reset-keys",
        json!({
            "private_key": "new-priv",
            "public_key": "new-pub",
            "uuid": "new-uuid",
            "short_id": "new-short",
        }),
    )
}

/// POST /api/reality/restart
pub async fn restart_reality() -> JsonResponse<Value> {
    placeholder_success("reality/restart")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::to_bytes, response::IntoResponse};

    async fn body_of(response: impl IntoResponse) -> String {
        let bytes = to_bytes(response.into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_reality_config_is_empty() {
        assert_eq!(
            body_of(reality_config().await).await,
            "{\"listen\":\"\",\"port\":0,\"private_key\":\"\",\"public_key\":\"\",\"short_id\":\"\"}\n"
        );
    }

    #[tokio::test]
    async fn test_reality_info_keys_sorted() {
        assert_eq!(
            body_of(reality_info().await).await,
            "{\"flow\":\"xtls-rprx-vision\",\"listen_port\":52368,\"private_key\":\"demo-priv\",\
             \"public_key\":\"demo-pub\",\"server_name\":\"www.amd.com\",\"short_id\":\"demo-short\",\
             \"user_name\":\"Reality_Default\",\"uuid\":\"demo-uuid\"}\n"
        );
    }

    #[tokio::test]
    async fn test_reset_keys_payload() {
        assert_eq!(
            body_of(reset_keys().await).await,
            "{\"private_key\":\"new-priv\",\"public_key\":\"new-pub\",\"short_id\":\"new-short\",\"uuid\":\"new-uuid\"}\n"
        );
    }
}
