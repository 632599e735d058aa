//! 启动器入口
//!
//! 把 `--date`/`--type` 参数转发给外部 Python 程序并透传其退出状态。
//! 子进程直接继承本进程的标准输入输出。

use env_logger::Env;
use limitup_cli::forwarder::build_forwarded_args;
use tokio::process::Command;

/// 外部 Python 解释器
const PYTHON_BIN: &str = "python";

#[tokio::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let forwarded = build_forwarded_args(&args);
    log::debug!("转发参数: {:?}", forwarded);

    match Command::new(PYTHON_BIN).args(&forwarded).status().await {
        Err(e) => {
            eprintln!("启动Python程序时发生错误: {}", e);
            std::process::exit(1);
        }
        Ok(status) if !status.success() => {
            // 被信号终止时没有退出码，按 1 处理
            let code = status.code().unwrap_or(1);
            eprintln!("Python程序异常退出，退出码: {}", code);
            std::process::exit(code);
        }
        Ok(_) => {}
    }
}
