//! 启动器参数转发
//!
//! 从进程参数中识别 `--date`/`--type` 并构造传给外部 Python 程序的参数列表。
//! 转发逻辑与具体的进程启动方式解耦，由启动器入口复用。

/// 外部程序入口文件名，始终作为转发参数的第一项
pub const ENTRY_POINT: &str = "main.py";

/// 可转发的标志，输出顺序固定为 date 在前
const FORWARDED_FLAGS: [&str; 2] = ["--date", "--type"];

/// 构造转发参数列表
///
/// 标志后面紧跟的非空 token 作为其值；标志缺值时整项丢弃。
/// 输入中标志的先后顺序不影响输出顺序。
pub fn build_forwarded_args(args: &[String]) -> Vec<String> {
    let mut forwarded = vec![ENTRY_POINT.to_string()];

    for flag in FORWARDED_FLAGS {
        if let Some(index) = args.iter().position(|arg| arg == flag) {
            if let Some(value) = args.get(index + 1).filter(|value| !value.is_empty()) {
                forwarded.push(flag.to_string());
                forwarded.push(value.clone());
            }
        }
    }

    forwarded
}
