//! 命令执行器
//!
//! 负责执行各 CLI 子命令的具体逻辑。

use std::fs;
use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tokio::sync::watch;
use tracing::{info, warn};

use petstore_client::PetstoreClient;
use petstore_shared::config::PetstoreConfig;
use petstore_shared::poll_until;

use super::commands::EntityKind;
use crate::generators::DataGenerator;

/// 冒烟检查各步骤的状态码
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeReport {
    pub pet_id: i64,
    pub create_status: u16,
    pub get_status: u16,
    pub get_attempts: u32,
    pub delete_status: u16,
}

/// 命令执行器
///
/// 持有加载好的配置，CLI 参数只做局部覆盖。
pub struct CommandRunner {
    config: PetstoreConfig,
}

impl CommandRunner {
    pub fn new(config: PetstoreConfig) -> Self {
        Self { config }
    }

    /// 执行 generate 命令
    ///
    /// 输出 JSON 数组；未指定文件时打印到标准输出。
    pub fn run_generate(
        &self,
        kind: EntityKind,
        count: usize,
        seed: Option<u64>,
        output: Option<&Path>,
    ) -> Result<()> {
        let mut generator = match seed {
            Some(seed) => DataGenerator::from_seed(seed),
            None => DataGenerator::from_config(&self.config.generator),
        };
        info!(?kind, count, seed = generator.seed(), "生成测试负载");

        let payloads = generate_payloads(&mut generator, kind, count)?;
        let json = serde_json::to_string_pretty(&payloads).context("序列化负载失败")?;

        match output {
            Some(path) => {
                let mut file = fs::File::create(path)
                    .with_context(|| format!("创建输出文件失败: {}", path.display()))?;
                file.write_all(json.as_bytes()).context("写入文件失败")?;
                info!(path = %path.display(), count, "负载已输出到文件");
            }
            None => println!("{json}"),
        }

        Ok(())
    }

    /// 执行 smoke 命令
    ///
    /// 创建宠物 → 轮询读取直到 200 → 删除。创建未返回 200 时失败。
    pub async fn run_smoke(
        &self,
        base_url: Option<&str>,
        cancel: &watch::Receiver<bool>,
    ) -> Result<SmokeReport> {
        let base_url = base_url.unwrap_or(self.config.base_url.as_str());
        let client = PetstoreClient::with_timeout(Some(base_url), self.config.request_timeout())
            .context("创建 Petstore 客户端失败")?;
        let mut generator = DataGenerator::from_config(&self.config.generator);
        let pet = generator.pet().build();

        info!(base_url = client.base_url(), pet_id = pet.id, "开始冒烟检查");

        let created = client.create_pet(&pet).await.context("创建宠物请求失败")?;
        println!("POST /pet -> {}", created.status_code());
        if created.status_code() != 200 {
            bail!(
                "创建宠物失败: status={}, body={}",
                created.status_code(),
                created.text()
            );
        }

        let policy = self.config.poll.policy();
        let fetched = poll_until(
            &policy,
            "smoke_get_pet",
            cancel,
            || client.get_pet(pet.id),
            |resp| resp.status_code() == 200,
        )
        .await
        .context("轮询读取宠物失败")?;
        println!(
            "GET /pet/{} -> {} (attempts={})",
            pet.id,
            fetched.value.status_code(),
            fetched.attempts
        );
        if !fetched.satisfied {
            warn!(pet_id = pet.id, "创建后仍未读到宠物，继续执行删除");
        }

        let deleted = client.delete_pet(pet.id).await.context("删除宠物请求失败")?;
        println!("DELETE /pet/{} -> {}", pet.id, deleted.status_code());

        let report = SmokeReport {
            pet_id: pet.id,
            create_status: created.status_code(),
            get_status: fetched.value.status_code(),
            get_attempts: fetched.attempts,
            delete_status: deleted.status_code(),
        };
        info!(?report, "冒烟检查完成");
        Ok(report)
    }
}

/// 按类型批量生成负载
pub fn generate_payloads(
    generator: &mut DataGenerator,
    kind: EntityKind,
    count: usize,
) -> Result<Vec<Value>> {
    (0..count)
        .map(|_| {
            let value = match kind {
                EntityKind::Pet => serde_json::to_value(generator.pet().build()),
                EntityKind::Order => serde_json::to_value(generator.order().build()),
                EntityKind::User => serde_json::to_value(generator.user().build()),
            };
            value.context("序列化负载失败")
        })
        .collect()
}

/// 创建随 Ctrl+C 触发的取消信号
pub fn shutdown_channel() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("收到中断信号，取消进行中的操作");
            let _ = tx.send(true);
        }
    });
    rx
}

// ============================================================================
// 单元测试
// ============================================================================
