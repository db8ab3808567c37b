//! 未匹配路由和方法的兜底处理器

use crate::server::error::ApiError;

/// 未知路径
pub async fn handle_not_found() -> ApiError {
    ApiError::NotFound
}

/// 已知路径上的其他方法
pub async fn handle_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
