//! 命令行参数定义
//!
//! `limitup` 二进制的参数解析，基于 clap derive

use clap::{Parser, ValueEnum};

#[mockall_double::double]
use crate::clock::Clock;

/// 命令行参数
#[derive(Debug, Parser)]
#[command(about = "获取涨停板股票信息", long_about = None)]
pub struct Cli {
    /// 查询日期，格式 YYYY-MM-DD，默认为当天
    #[clap(long)]
    pub date: Option<String>,

    /// 市场代码，默认 A 股
    #[clap(long, default_value = "A")]
    pub market: String,

    /// 显示类型：all-全部信息，simple-简要信息，stats-仅统计信息
    #[clap(long, value_enum, default_value = "all")]
    pub r#type: DisplayType,

    /// 获取失败时以非零退出码退出
    #[clap(long)]
    pub strict: bool,
}

/// 显示类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DisplayType {
    /// 全部信息
    All,
    /// 简要信息
    Simple,
    /// 仅统计信息
    Stats,
}

impl Cli {
    /// 解析查询日期，未指定时取当天（北京时间）
    pub fn resolve_date(&self, clock: &Clock) -> String {
        match &self.date {
            Some(date) => date.clone(),
            None => clock.now().format("%Y-%m-%d").to_string(),
        }
    }
}
