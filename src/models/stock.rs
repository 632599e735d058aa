//! 股票数据模型
//!
//! 定义涨停板相关的数据结构

use serde::{Deserialize, Serialize};

/// 涨停板股票信息
///
/// 来自远程接口的单条涨停记录，字段名与接口 JSON 保持一致
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    /// 股票代码
    pub code: String,
    /// 股票名称
    pub name: String,
    /// 最新价
    pub price: f64,
    /// 涨跌幅（百分比）
    pub change_percent: f64,
    /// 封板时间（HH:MM）
    pub limit_time: String,
    /// 连板数
    pub limit_count: u32,
}

/// 涨停板接口响应
///
/// 接口返回格式: `{ "stocks": [...] }`
#[derive(Debug, Deserialize)]
pub struct LimitUpResponse {
    /// 涨停股票列表
    pub stocks: Vec<StockRecord>,
}
