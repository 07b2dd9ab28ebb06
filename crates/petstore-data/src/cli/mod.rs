//! CLI 模块
//!
//! - `generate` - 生成宠物、订单或用户负载
//! - `smoke` - 对目标服务执行创建、读取、删除冒烟检查
//!
//! # 使用示例
//!
//! ```bash
//! # 生成 5 个用户，固定种子，写入文件
//! petstore-data generate -k user -c 5 -s 42 -o users.json
//!
//! # 冒烟检查本地服务
//! petstore-data smoke --base-url http://localhost:8080/v2
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands, EntityKind};
pub use runner::{CommandRunner, SmokeReport, generate_payloads, shutdown_channel};
