//! 终端报表渲染
//!
//! 把涨停板股票列表渲染成表格、合计行和统计信息。
//! 渲染函数只产出字符串，打印由二进制入口负责。

use std::collections::BTreeMap;

use crate::cli::DisplayType;
use crate::models::StockRecord;

/// 按显示类型渲染完整报表
pub fn render_report(stocks: &[StockRecord], display_type: DisplayType) -> String {
    let mut out = String::new();

    if matches!(display_type, DisplayType::All | DisplayType::Simple) {
        out.push_str(&render_table(stocks));
    }

    out.push_str(&format!("\n{}\n", render_count(stocks.len())));

    if matches!(display_type, DisplayType::All | DisplayType::Stats) {
        out.push_str(&render_stats(stocks));
    }

    out
}

/// 渲染涨停板股票表格
pub fn render_table(stocks: &[StockRecord]) -> String {
    let mut out = String::new();
    out.push_str("\n====== 涨停板股票列表 ======\n");
    out.push_str(&format!(
        "{:<10}{:<12}{:<10}{:<10}{:<10}{}\n",
        "代码", "名称", "现价", "涨幅", "封板时间", "封板次数"
    ));

    for stock in stocks {
        out.push_str(&format!(
            "{:<10}{:<12}{:<10}{:<10}{:<10}{}\n",
            stock.code,
            stock.name,
            stock.price,
            format!("{}%", stock.change_percent),
            stock.limit_time,
            stock.limit_count
        ));
    }

    out
}

/// 渲染合计行
pub fn render_count(total: usize) -> String {
    format!("总计: {}只涨停股", total)
}

/// 渲染统计信息：连板数分布与封板时间分布
pub fn render_stats(stocks: &[StockRecord]) -> String {
    let mut out = String::new();

    out.push_str("\n连板数统计:\n");
    let mut by_limit_count: BTreeMap<u32, usize> = BTreeMap::new();
    for stock in stocks {
        *by_limit_count.entry(stock.limit_count).or_default() += 1;
    }
    for (limit_count, total) in &by_limit_count {
        out.push_str(&format!("{}连板: {}只\n", limit_count, total));
    }

    out.push_str("\n封板时间分布:\n");
    let mut by_hour: BTreeMap<u32, usize> = BTreeMap::new();
    for stock in stocks {
        if let Some(hour) = hour_of(&stock.limit_time) {
            *by_hour.entry(hour).or_default() += 1;
        }
    }
    for (hour, total) in &by_hour {
        out.push_str(&format!("{:02}点: {}个\n", hour, total));
    }

    out
}

/// 从封板时间字符串中提取小时，格式不符时返回 None
fn hour_of(time: &str) -> Option<u32> {
    time.get(..2)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stock() -> StockRecord {
        StockRecord {
            code: "600001".to_string(),
            name: "X".to_string(),
            price: 10.5,
            change_percent: 10.0,
            limit_time: "09:30".to_string(),
            limit_count: 1,
        }
    }

    /// 测试表格包含六个映射字段，涨幅带百分号
    #[test]
    fn test_render_table_row() {
        let table = render_table(&[sample_stock()]);
        assert!(table.contains("====== 涨停板股票列表 ======"));
        for field in ["600001", "X", "10.5", "10%", "09:30", "1"] {
            assert!(table.contains(field), "表格应包含字段 {}", field);
        }
    }

    /// 测试合计行文案
    #[test]
    fn test_render_count() {
        assert_eq!(render_count(1), "总计: 1只涨停股");
        assert_eq!(render_count(35), "总计: 35只涨停股");
    }

    /// 测试连板数与封板时间分布统计
    #[test]
    fn test_render_stats() {
        let mut stocks = vec![sample_stock(), sample_stock(), sample_stock()];
        stocks[1].limit_time = "10:05".to_string();
        stocks[2].limit_count = 2;

        let stats = render_stats(&stocks);
        assert!(stats.contains("1连板: 2只"));
        assert!(stats.contains("2连板: 1只"));
        assert!(stats.contains("09点: 2个"));
        assert!(stats.contains("10点: 1个"));
    }

    /// 测试无法解析的封板时间不计入分布
    #[test]
    fn test_render_stats_skips_bad_time() {
        let mut stock = sample_stock();
        stock.limit_time = "-".to_string();
        let stats = render_stats(&[stock]);
        assert!(!stats.contains("点:"));
    }

    /// 测试显示类型裁剪输出内容
    #[test]
    fn test_render_report_display_types() {
        let stocks = vec![sample_stock()];

        let all = render_report(&stocks, DisplayType::All);
        assert!(all.contains("涨停板股票列表"));
        assert!(all.contains("总计: 1只涨停股"));
        assert!(all.contains("连板数统计"));

        let simple = render_report(&stocks, DisplayType::Simple);
        assert!(simple.contains("涨停板股票列表"));
        assert!(!simple.contains("连板数统计"));

        let stats = render_report(&stocks, DisplayType::Stats);
        assert!(!stats.contains("涨停板股票列表"));
        assert!(stats.contains("连板数统计"));
    }
}
