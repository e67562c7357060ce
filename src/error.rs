//! 统一错误处理
//!
//! - `ApiError`：handler 级错误，实现 `IntoResponse`，统一渲染为错误信封
//! - `StartupError`：启动阶段错误，进程直接退出

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::path::PathBuf;

use crate::api::response::write_error;
use crate::infra::CommandError;

/// 统一 API 错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 400 - 缺少必需参数
    BadRequest(String),
    /// 405 - 请求方法不被该端点接受
    MethodNotAllowed,
    /// 500 - 外部命令执行失败
    CommandFailed(String),
    /// 500 - 其他内部错误
    Internal(String),
}

impl ApiError {
    /// 创建请求无效错误
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::CommandFailed(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 写入错误信封的消息
    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) | ApiError::CommandFailed(msg) | ApiError::Internal(msg) => {
                msg.clone()
            }
            ApiError::MethodNotAllowed => "method not allowed".to_string(),
        }
    }
}

impl From<CommandError> for ApiError {
    fn from(err: CommandError) -> Self {
        ApiError::CommandFailed(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        }
        write_error(status, self.message())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(m) => write!(f, "Bad request: {}", m),
            ApiError::MethodNotAllowed => write!(f, "Method not allowed"),
            ApiError::CommandFailed(m) => write!(f, "Command failed: {}", m),
            ApiError::Internal(m) => write!(f, "Internal error: {}", m),
        }
    }
}

impl std::error::Error for ApiError {}

/// 便捷类型别名
pub type ApiResult<T> = Result<T, ApiError>;

/// 启动错误，任何一种都会导致进程以非零状态退出
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("web dir not found: {}", .0.display())]
    WebDirNotFound(PathBuf),

    #[error("certificate file not found: {}: {source}", .path.display())]
    CertificateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("private key file not found: {}: {source}", .path.display())]
    KeyNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid listen address {0:?}")]
    InvalidListenAddr(String),

    #[error("invalid TLS material: {0}")]
    TlsConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::CommandFailed("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::internal("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_command_error_message_is_stderr() {
        let err: ApiError = CommandError::Failed {
            program: "systemctl".into(),
            code: Some(5),
            stdout: String::new(),
            stderr: "Failed to restart foo.service: Unit foo.service not found.\n".into(),
        }
        .into();

        assert_eq!(
            err.message(),
            "Failed to restart foo.service: Unit foo.service not found."
        );
    }

    #[tokio::test]
    async fn test_method_not_allowed_envelope() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "method not allowed");
    }

    #[test]
    fn test_startup_error_display() {
        let err = StartupError::WebDirNotFound(PathBuf::from("/srv/web"));
        assert_eq!(err.to_string(), "web dir not found: /srv/web");
    }
}
