//! 测试辅助工具模块
//!
//! 提供状态码断言宏和响应体检查函数。

mod assertions;

pub use assertions::*;
