//! JSON 响应写出
//!
//! 所有 handler 的响应都经过这里：设置 `Content-Type: application/json`，
//! 写状态码，body 为 JSON 加一个换行符。

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// 错误信封 `{"error": <message>, "success": false}`
///
/// 字段顺序与按 key 排序的 map 编码一致
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub success: bool,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            success: false,
        }
    }
}

/// 带状态码的 JSON 响应
#[derive(Debug)]
pub struct JsonResponse<T> {
    pub status: StatusCode,
    pub body: T,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn with_status(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }
}

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        write_json(self.status, &self.body)
    }
}

/// 写出 JSON 响应
///
/// 编码失败时只记录日志，照常写出状态码和空 body
pub fn write_json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Response {
    let body = match serde_json::to_vec(value) {
        Ok(mut bytes) => {
            bytes.push(b'\n');
            bytes
        }
        Err(e) => {
            tracing::warn!(error = %e, status = status.as_u16(), "Failed to encode JSON response");
            Vec::new()
        }
    };

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

/// 写出错误信封
pub fn write_error(status: StatusCode, message: impl Into<String>) -> Response {
    write_json(status, &ErrorEnvelope::new(message))
}
