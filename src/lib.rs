//! 涨停板股票命令行工具
//!
//! 提供两个二进制入口：
//! - `limitup`：获取指定日期/市场的涨停板股票数据并在终端展示
//! - `launcher`：转发 `--date`/`--type` 参数并启动外部 Python 程序

pub mod cli;       // 命令行参数定义
pub mod clock;     // 时钟能力（北京时间）
pub mod config;    // 配置加载
pub mod forwarder; // 启动器参数转发
pub mod models;    // 数据模型定义
pub mod report;    // 终端报表渲染
pub mod services;  // 数据获取服务
