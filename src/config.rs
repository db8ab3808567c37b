//! 应用配置模块
//!
//! 负责从环境变量加载应用配置，包括：
//! - 服务器监听地址和端口
//! - 单个请求的超时时间

use anyhow::{Context, Result};
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 应用配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 服务器监听地址（如 "0.0.0.0" 或 "127.0.0.1"）
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 请求超时，超时返回 408
    pub request_timeout: Duration,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    ///
    /// - `ESE_DEMO_HOST`: 服务器监听地址（默认: "0.0.0.0"）
    /// - `ESE_DEMO_PORT`: 服务器监听端口（默认: 8000）
    /// - `ESE_DEMO_REQUEST_TIMEOUT_SECS`: 请求超时秒数（默认: 30）
    ///
    /// # 错误
    ///
    /// - 如果 `ESE_DEMO_PORT` 不是有效的端口号
    /// - 如果 `ESE_DEMO_REQUEST_TIMEOUT_SECS` 不是正整数
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("ESE_DEMO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("ESE_DEMO_PORT") {
            Some(raw) => raw
                .parse()
                .context("ESE_DEMO_PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("ESE_DEMO_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .context("ESE_DEMO_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            anyhow::bail!("ESE_DEMO_REQUEST_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Self {
            host,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// 本地服务的基础 URL（供 probe 命令使用）
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.base_url(), "http://0.0.0.0:8000");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ESE_DEMO_HOST", "127.0.0.1"),
            ("ESE_DEMO_PORT", "9090"),
            ("ESE_DEMO_REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:9090");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup_from(&[("ESE_DEMO_PORT", "70000")])).unwrap_err();
        assert!(err.to_string().contains("ESE_DEMO_PORT"));
    }

    #[test]
    fn rejects_bad_timeout() {
        for raw in ["abc", "-1", "0"] {
            let err = Config::from_lookup(lookup_from(&[("ESE_DEMO_REQUEST_TIMEOUT_SECS", raw)]))
                .unwrap_err();
            assert!(
                err.to_string().contains("ESE_DEMO_REQUEST_TIMEOUT_SECS"),
                "{raw}: {err}"
            );
        }
    }
}
