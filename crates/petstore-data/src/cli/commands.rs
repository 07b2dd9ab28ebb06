//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use petstore_shared::config::ObservabilityConfig;

/// Petstore 测试数据工具
///
/// 生成测试负载，或对目标服务执行一次冒烟检查。
#[derive(Parser, Debug)]
#[command(name = "petstore-data")]
#[command(version, about = "Petstore 测试数据与冒烟工具")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，未指定时沿用配置文件
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 生成的资源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Pet,
    Order,
    User,
}

/// 子命令枚举
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 生成测试负载（JSON 数组）
    ///
    /// 默认输出到标准输出；指定 `--output` 时写入文件。
    Generate {
        /// 资源类型
        #[arg(short, long, value_enum)]
        kind: EntityKind,

        /// 生成数量
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// 随机种子（覆盖配置文件）
        #[arg(short, long)]
        seed: Option<u64>,

        /// 输出文件路径
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 冒烟检查：创建宠物，轮询读取，再删除
    Smoke {
        /// 服务地址（覆盖配置文件）
        #[arg(long)]
        base_url: Option<String>,
    },
}

impl Cli {
    /// 命令行给出日志级别时覆盖配置；RUST_LOG 仍然优先于两者
    pub fn apply_log_level(&self, observability: &mut ObservabilityConfig) {
        if let Some(level) = &self.log_level {
            observability.log_level = level.clone();
        }
    }
}

// ============================================================================
// 单元测试
// ============================================================================
