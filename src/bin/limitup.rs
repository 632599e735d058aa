//! 涨停板数据报表入口
//!
//! 获取指定日期/市场的涨停板股票数据并在终端展示。
//! 默认情况下获取失败只在 stderr 上报错，进程仍正常退出；
//! 传入 `--strict` 时失败以退出码 1 结束。

use clap::Parser;
use env_logger::Env;
use limitup_cli::cli::Cli;
use limitup_cli::clock::Clock;
use limitup_cli::config::AppConfig;
use limitup_cli::report::render_report;
use limitup_cli::services::LimitUpService;

#[tokio::main]
async fn main() {
    // 初始化日志系统，默认日志级别为 info
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Cli::parse();
    let config = AppConfig::load();

    if let Err(e) = run(&args, &config).await {
        eprintln!("获取数据失败: {}", e);
        if args.strict {
            std::process::exit(1);
        }
    }
}

/// 获取并展示涨停板数据，所有失败统一交由 main 上报
async fn run(args: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    let clock = Clock::default();
    println!("当前时间: {}", clock.now().format("%Y-%m-%d %H:%M:%S"));

    let date = args.resolve_date(&clock);
    println!("正在获取{}的{}股涨停板数据...", date, args.market);

    let service = LimitUpService::new(&config.api)?;
    let stocks = service.fetch_limit_up(&date, &args.market).await?;

    if stocks.is_empty() {
        println!("未获取到涨停股票数据");
        return Ok(());
    }

    print!("{}", render_report(&stocks, args.r#type));
    Ok(())
}
