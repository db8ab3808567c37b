//! ese-demo - 两数求和 HTTP 服务
//!
//! 一个极简的 HTTP 服务，对两个浮点数求和。
//!
//! # 输入形式
//!
//! - 查询参数：`GET /sum?a=2&b=3`
//! - 表达式：`GET /sum?expr=10%2B15`
//! - 路径段：`GET /sum/4/6`
//!
//! # 命令行接口
//!
//! - `serve`: 启动 API 服务器
//! - `probe`: 向本地服务器发送求和请求

mod commands;
mod config;
mod server;
mod sum;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use server::handlers::SumQuery;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ese-demo CLI
#[derive(Parser)]
#[command(name = "ese-demo")]
#[command(about = "HTTP service that adds two numbers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// 可用的命令
#[derive(Subcommand)]
enum Commands {
    /// 启动 API 服务器
    Serve,
    /// 向本地服务器发送求和请求
    Probe {
        /// 第一个操作数
        #[arg(short, allow_negative_numbers = true)]
        a: Option<f64>,
        /// 第二个操作数
        #[arg(short, allow_negative_numbers = true)]
        b: Option<f64>,
        /// "a+b" 形式的表达式，优先于 -a / -b
        #[arg(short, long)]
        expr: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env 文件（如果存在）
    if let Ok(dotenv_path) = std::env::var("ESE_DEMO_ENV_FILE") {
        dotenvy::from_path(&dotenv_path).ok();
    } else {
        dotenvy::dotenv().ok();
    }

    // 初始化日志系统
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ese_demo=info,tower_http=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    // 解析命令行参数和配置
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // 执行相应的命令
    match cli.command {
        Commands::Serve => commands::serve_command(config).await,
        Commands::Probe { a, b, expr } => {
            commands::probe_command(config, SumQuery { a, b, expr }).await
        }
    }
}
