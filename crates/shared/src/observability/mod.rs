//! 日志初始化模块
//!
//! 测试进程、CLI 共用同一个入口配置 tracing，确保日志字段和格式一致。

pub mod tracing;

pub use self::tracing::init_tracing;
