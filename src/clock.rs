//! 时钟能力
//!
//! 报表默认查询"当天"，这里把当前时间包装成可注入的能力，
//! 测试时可以替换成固定时间

use chrono::DateTime;
use chrono::Utc;
use chrono_tz::Asia::Shanghai;
use chrono_tz::Tz;

/// 系统时钟，返回北京时间（UTC+8）
#[derive(Default)]
pub struct Clock;

#[mockall::automock]
impl Clock {
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&Shanghai)
    }
}
