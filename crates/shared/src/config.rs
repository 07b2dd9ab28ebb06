//! 配置管理模块
//!
//! 支持配置文件加载、环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::retry::PollPolicy;

/// 公共 Petstore 演示服务地址
pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

/// 数据生成器配置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// 随机种子，未设置时每次运行随机选取并打印到日志
    pub seed: Option<u64>,
}

/// 轮询配置（毫秒粒度，便于写进 TOML 和环境变量）
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub multiplier: f64,
    pub timeout_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        let policy = PollPolicy::default();
        Self {
            max_attempts: policy.max_attempts,
            initial_delay_ms: policy.initial_delay.as_millis() as u64,
            max_delay_ms: policy.max_delay.as_millis() as u64,
            multiplier: policy.multiplier,
            timeout_ms: policy.timeout.as_millis() as u64,
        }
    }
}

impl PollConfig {
    /// 转换为轮询策略
    pub fn policy(&self) -> PollPolicy {
        PollPolicy {
            max_attempts: self.max_attempts.max(1),
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
            multiplier: self.multiplier,
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 是否输出 JSON 格式日志
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// 测试框架配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PetstoreConfig {
    pub environment: String,
    pub base_url: String,
    /// 单个请求超时；为空时沿用 HTTP 客户端默认行为
    pub request_timeout_secs: Option<u64>,
    pub generator: GeneratorConfig,
    pub poll: PollConfig,
    pub observability: ObservabilityConfig,
}

impl Default for PetstoreConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            generator: GeneratorConfig::default(),
            poll: PollConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl PetstoreConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. 内置默认值
    /// 2. config/default.toml
    /// 3. config/{environment}.toml
    /// 4. 环境变量（PETSTORE_ 前缀，嵌套字段用 `__` 分隔，如 PETSTORE_POLL__MAX_ATTEMPTS）
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
        Self::load_from(Path::new(&config_dir))
    }

    /// 从指定目录加载配置
    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let env = std::env::var("PETSTORE_ENV").unwrap_or_else(|_| "development".to_string());
        Self::load_layers(config_dir, &env, env_overrides())
    }

    /// 按给定环境名和覆盖源叠加各层配置
    fn load_layers(
        config_dir: &Path,
        env: &str,
        overrides: Environment,
    ) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("environment", env)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{}.toml", env))).required(false))
            .add_source(overrides)
            .build()?
            .try_deserialize()
    }

    /// 请求超时
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// 是否指向公共演示服务
    pub fn is_public_demo(&self) -> bool {
        self.base_url.trim_end_matches('/') == DEFAULT_BASE_URL
    }
}

/// `PETSTORE_` 前缀的环境变量覆盖源
fn env_overrides() -> Environment {
    Environment::with_prefix("PETSTORE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
