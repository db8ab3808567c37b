//! Serve 命令 - 启动 API 服务器
//!
//! 此模块实现 `serve` 命令，启动提供求和接口的 HTTP 服务器。

use anyhow::Result;

use crate::config::Config;
use crate::server;

/// 执行服务器启动命令
///
/// # 参数
///
/// * `config` - 应用配置，包含监听地址、端口和请求超时
///
/// # 功能
///
/// - 初始化 HTTP 路由和中间件
/// - 启动服务器并等待关闭信号
/// - 支持优雅关闭（Ctrl+C 或 SIGTERM）
pub async fn serve_command(config: Config) -> Result<()> {
    server::serve(config).await
}
