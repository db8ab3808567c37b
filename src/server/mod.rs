//! Server 应用层
//!
//! HTTP 服务器和请求处理
//!
//! | 方法 | 路径 | 说明 |
//! |------|------|------|
//! | `GET` | `/sum` | 通过 `a` / `b` 或 `expr` 查询参数求和 |
//! | `GET` | `/sum/{a}/{b}` | 通过路径段求和 |
//! | `GET` | `/health` | 健康检查 |

mod error;
pub mod handlers;
mod middleware;

pub use error::ErrorBody;

use anyhow::{Context, Result};
use axum::{http::StatusCode, middleware as axum_middleware, routing::get, Router};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;

pub async fn serve(config: Config) -> Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    let addr = listener.local_addr()?;
    tracing::info!("Starting server on http://{}", addr);

    let app = build_router(config.request_timeout);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

pub fn build_router(request_timeout: Duration) -> Router {
    let routes = Router::new()
        .route("/sum", get(handlers::handle_sum_query))
        .route("/sum/{a}/{b}", get(handlers::handle_sum_path))
        .route("/health", get(handlers::handle_health));

    with_layers(routes, request_timeout)
}

/// 挂载兜底处理器和公共中间件
fn with_layers(routes: Router, request_timeout: Duration) -> Router {
    routes
        .fallback(handlers::handle_not_found)
        .method_not_allowed_fallback(handlers::handle_method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_logger))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                )),
        )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
