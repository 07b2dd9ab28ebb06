//! 共享库
//!
//! Petstore 测试框架各 crate 共用的配置、错误处理、轮询和日志基础设施。

pub mod config;
pub mod error;
pub mod observability;
pub mod retry;

pub use config::PetstoreConfig;
pub use error::{PetstoreError, Result};
pub use retry::{PollOutcome, PollPolicy, poll_until};
