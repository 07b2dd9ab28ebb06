//! Petstore Data CLI
//!
//! 测试数据生成与冒烟检查的命令行入口点。

use anyhow::Context;
use clap::Parser;
use petstore_data::cli::{Cli, CommandRunner, Commands, shutdown_channel};
use petstore_shared::config::PetstoreConfig;
use petstore_shared::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = PetstoreConfig::load().context("加载配置失败")?;
    cli.apply_log_level(&mut config.observability);
    init_tracing(&config.observability);

    let runner = CommandRunner::new(config);

    match cli.command {
        Commands::Generate {
            kind,
            count,
            seed,
            output,
        } => {
            runner.run_generate(kind, count, seed, output.as_deref())?;
        }
        Commands::Smoke { base_url } => {
            let cancel = shutdown_channel();
            runner.run_smoke(base_url.as_deref(), &cancel).await?;
        }
    }

    Ok(())
}
