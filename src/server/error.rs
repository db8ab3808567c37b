//! HTTP 错误响应
//!
//! 所有客户端错误统一返回 `{"detail": "..."}`。

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::sum::SumError;

/// 错误响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// API 层错误
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 操作数或表达式校验失败（400）
    #[error(transparent)]
    Sum(#[from] SumError),
    /// 查询参数或路径段无法转换为目标类型（422）
    #[error("{0}")]
    Unprocessable(String),
    /// 未匹配到路由（404）
    #[error("Not Found")]
    NotFound,
    /// 路由存在但方法不允许（405）
    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Unprocessable(rejection.body_text())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Sum(_) => StatusCode::BAD_REQUEST,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "rejected");

        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
