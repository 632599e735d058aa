//! 涨停板数据服务
//!
//! 对接远程涨停板接口，按日期和市场查询当日涨停股票列表

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::config::ApiConfig;
use crate::models::{LimitUpResponse, StockRecord};

/// 涨停板数据服务
pub struct LimitUpService {
    client: Client,
    base_url: String,
}

impl LimitUpService {
    /// 按配置构造 HTTP 客户端
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// 获取指定日期和市场的涨停板股票列表
    pub async fn fetch_limit_up(&self, date: &str, market: &str) -> Result<Vec<StockRecord>> {
        let url = build_request_url(&self.base_url, date, market)?;
        log::debug!("请求涨停板数据 URL: {}", url);

        let response = self.client
            .get(url)
            .header(
                "User-Agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("API请求失败: {}", response.status()));
        }

        let text = response.text().await?;
        parse_limit_up_response(&text)
    }
}

/// 构造查询 URL，date/market 作为查询参数编码进地址
fn build_request_url(base_url: &str, date: &str, market: &str) -> Result<Url> {
    let url = Url::parse_with_params(base_url, &[("date", date), ("market", market)])?;
    Ok(url)
}

/// 解析涨停板接口返回的 JSON 数据
fn parse_limit_up_response(text: &str) -> Result<Vec<StockRecord>> {
    let data: LimitUpResponse = serde_json::from_str(text)?;
    Ok(data.stocks)
}
