//! 统一错误处理模块
//!
//! 定义测试框架共享的错误类型，使用 thiserror 提供良好的错误信息。
//! 远端服务返回的 4xx/5xx 不属于这里的错误：状态码原样交给调用方断言。

use thiserror::Error;

/// 框架错误类型
#[derive(Debug, Error)]
pub enum PetstoreError {
    // ==================== 传输层错误 ====================
    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("无效的服务地址: {url} - {message}")]
    InvalidBaseUrl { url: String, message: String },

    // ==================== 数据错误 ====================
    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    // ==================== 配置错误 ====================
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    // ==================== 轮询错误 ====================
    #[error("轮询超时: {operation} 在 {attempts} 次尝试后仍未完成")]
    PollTimeout { operation: String, attempts: u32 },

    #[error("轮询已取消: {operation}")]
    Cancelled { operation: String },
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, PetstoreError>;

impl PetstoreError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Http(_) => "HTTP_ERROR",
            Self::InvalidBaseUrl { .. } => "INVALID_BASE_URL",
            Self::Json(_) => "JSON_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::PollTimeout { .. } => "POLL_TIMEOUT",
            Self::Cancelled { .. } => "CANCELLED",
        }
    }

    /// 是否为可重试错误
    ///
    /// 只有传输层的瞬时故障值得重试；构造请求失败（如 URL 非法）重试也无济于事。
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(err) => err.is_timeout() || err.is_connect() || err.is_request(),
            _ => false,
        }
    }
}
