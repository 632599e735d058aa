//! 业务逻辑服务模块
//!
//! 封装数据获取和处理逻辑

pub mod limitup;  // 涨停板数据服务

pub use limitup::LimitUpService;
