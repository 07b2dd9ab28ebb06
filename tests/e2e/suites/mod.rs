//! 测试套件模块
//!
//! 按资源组织的测试用例集合。

pub mod store;
