//! Probe 命令 - 向本地服务器发送求和请求
//!
//! 此模块实现 `probe` 命令，用于向正在运行的服务器发送一次 `GET /sum`，
//! 验证服务是否正常工作。

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use crate::config::Config;
use crate::server::handlers::{SumQuery, SumResponse};
use crate::server::ErrorBody;

const PROBE_TIMEOUT_SECS: u64 = 10;

/// 执行 probe 命令
///
/// # 参数
///
/// * `config` - 应用配置，用于获取服务器地址
/// * `query` - 求和参数；全部为空时发送 `a=2&b=3`
pub async fn probe_command(config: Config, query: SumQuery) -> Result<()> {
    let query = if query.a.is_none() && query.b.is_none() && query.expr.is_none() {
        SumQuery {
            a: Some(2.0),
            b: Some(3.0),
            expr: None,
        }
    } else {
        query
    };

    let base_url = config.base_url();
    println!("Sending sum request to {}/sum ...", base_url);

    let client = Client::builder()
        .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
        .build()
        .context("Failed to create HTTP client")?;

    let sum = fetch_sum(&client, &base_url, &query).await?;
    println!("sum = {}", sum);

    Ok(())
}

/// 请求 `GET {base_url}/sum` 并返回结果
///
/// 非 2xx 响应时返回包含服务端 `detail` 的错误
pub async fn fetch_sum(client: &Client, base_url: &str, query: &SumQuery) -> Result<f64> {
    let response = client
        .get(format!("{}/sum", base_url))
        .query(query)
        .send()
        .await
        .context("Request failed. Make sure the server is running.")?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.detail)
            .unwrap_or(body);
        anyhow::bail!("Request failed ({}): {}", status, detail);
    }

    let body: SumResponse = response
        .json()
        .await
        .context("Failed to parse sum response")?;
    Ok(body.sum)
}
