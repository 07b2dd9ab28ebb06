//! 轮询策略与执行器
//!
//! 远端服务写入后存在可见性延迟（最终一致性窗口），读操作可能短暂返回 404。
//! 这里提供有界的指数退避轮询：按次数、总超时和取消信号三重约束，
//! 不满足条件时把最后一次结果交还调用方断言。

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{info, warn};

use crate::error::{PetstoreError, Result};

/// 慢流程中为每次探测的请求本身预留的耗时
const EXTENDED_ATTEMPT_BUDGET: Duration = Duration::from_secs(3);

/// 超时配置过大无法表示时使用的截止时间跨度
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

// ---------------------------------------------------------------------------
// PollPolicy: 轮询策略配置
// ---------------------------------------------------------------------------

/// 轮询策略配置
///
/// 首次探测立即执行，之后每次等待 `initial_delay * multiplier^n`，
/// 不超过 `max_delay`。`timeout` 约束整个轮询过程的总耗时。
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// 最大探测次数（含首次）
    pub max_attempts: u32,
    /// 第一次重试前的等待时间
    pub initial_delay: Duration,
    /// 单次等待上限
    pub max_delay: Duration,
    /// 每次重试的退避倍数
    pub multiplier: f64,
    /// 整个轮询的超时时间
    pub timeout: Duration,
}

impl Default for PollPolicy {
    /// 默认策略：最多 5 次探测，首次等待 500ms，单次等待不超过 2 秒，总超时 10 秒
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(2),
            multiplier: 2.0,
            timeout: Duration::from_secs(10),
        }
    }
}

impl PollPolicy {
    /// 删除确认等较慢流程使用的策略
    ///
    /// 最多 10 次探测，退避总和 21.5 秒。总超时按退避总和加上每次请求的
    /// 预留耗时计算，正常延迟下次数先于超时用尽。
    pub fn extended() -> Self {
        let mut policy = Self {
            max_attempts: 10,
            max_delay: Duration::from_secs(3),
            ..Self::default()
        };
        policy.timeout = policy.total_backoff() + EXTENDED_ATTEMPT_BUDGET * policy.max_attempts;
        policy
    }

    /// 计算第 N 次重试前的等待时间（retry 从 0 开始）
    ///
    /// 公式: initial_delay * multiplier^retry，结果不超过 max_delay。
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let base_ms = self.initial_delay.as_millis() as f64;
        let delay_ms = base_ms * self.multiplier.powi(retry as i32);
        let capped_ms = delay_ms.min(self.max_delay.as_millis() as f64);
        Duration::from_millis(capped_ms as u64)
    }

    /// 用尽全部探测次数时各次退避等待的总和
    pub fn total_backoff(&self) -> Duration {
        (0..self.max_attempts.saturating_sub(1))
            .map(|retry| self.delay_for_retry(retry))
            .sum()
    }

    /// 已完成 `attempts` 次探测后是否还能继续
    pub fn has_attempts_left(&self, attempts: u32) -> bool {
        attempts < self.max_attempts
    }
}

/// 轮询结果
#[derive(Debug)]
pub struct PollOutcome<T> {
    /// 最后一次探测的返回值
    pub value: T,
    /// 实际探测次数
    pub attempts: u32,
    /// 最后一次返回值是否满足条件
    pub satisfied: bool,
}

// ---------------------------------------------------------------------------
// poll_until: 带退避的异步轮询
// ---------------------------------------------------------------------------

/// 轮询直到条件满足
///
/// - `probe` 每次执行一次远端请求；返回可重试错误时计为一次未满足的探测，
///   其他错误直接向上传播。
/// - `is_done` 判断返回值是否满足条件，满足即提前返回。
/// - 次数用尽时返回最后一次的值，`satisfied = false`。
/// - 超过 `policy.timeout` 返回 [`PetstoreError::PollTimeout`]；
///   `cancel` 变为 `true` 时返回 [`PetstoreError::Cancelled`]。
pub async fn poll_until<F, Fut, T>(
    policy: &PollPolicy,
    operation_name: &str,
    cancel: &watch::Receiver<bool>,
    mut probe: F,
    is_done: impl Fn(&T) -> bool,
) -> Result<PollOutcome<T>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let now = Instant::now();
    let deadline = now
        .checked_add(policy.timeout)
        .unwrap_or_else(|| now + FAR_FUTURE);
    let mut cancel = cancel.clone();
    let mut attempts: u32 = 0;
    let mut last: Option<T> = None;
    let mut last_error: Option<PetstoreError> = None;

    loop {
        if *cancel.borrow() {
            return Err(cancelled(operation_name));
        }

        let result = tokio::select! {
            biased;
            _ = wait_cancelled(&mut cancel) => return Err(cancelled(operation_name)),
            _ = tokio::time::sleep_until(deadline) => {
                return Err(timed_out(operation_name, attempts, policy));
            }
            result = probe() => result,
        };
        attempts += 1;

        match result {
            Ok(value) => {
                if is_done(&value) {
                    if attempts > 1 {
                        info!(operation = operation_name, attempts, "轮询在重试后满足条件");
                    }
                    return Ok(PollOutcome {
                        value,
                        attempts,
                        satisfied: true,
                    });
                }
                last = Some(value);
            }
            Err(err) if err.is_retryable() => {
                warn!(
                    operation = operation_name,
                    attempts,
                    error = %err,
                    "探测失败，按可重试错误处理"
                );
                last_error = Some(err);
            }
            Err(err) => {
                warn!(
                    operation = operation_name,
                    error = %err,
                    "探测失败且不可重试，直接返回错误"
                );
                return Err(err);
            }
        }

        if !policy.has_attempts_left(attempts) {
            warn!(
                operation = operation_name,
                attempts,
                max_attempts = policy.max_attempts,
                "已达最大探测次数，条件仍未满足"
            );
            // 没有拿到过任何结果时只能把最后一次错误交出去
            return match (last, last_error) {
                (Some(value), _) => Ok(PollOutcome {
                    value,
                    attempts,
                    satisfied: false,
                }),
                (None, Some(err)) => Err(err),
                (None, None) => Err(timed_out(operation_name, attempts, policy)),
            };
        }

        let delay = policy.delay_for_retry(attempts - 1);
        warn!(
            operation = operation_name,
            attempts,
            delay_ms = delay.as_millis() as u64,
            "条件未满足，退避后重试"
        );

        tokio::select! {
            biased;
            _ = wait_cancelled(&mut cancel) => return Err(cancelled(operation_name)),
            _ = tokio::time::sleep_until(deadline) => {
                return Err(timed_out(operation_name, attempts, policy));
            }
            _ = tokio::time::sleep(delay) => {}
        }
    }
}

/// 创建一个永不触发的取消信号
///
/// 返回的 Sender 需要由调用方持有；Sender 被丢弃后接收端视为永不取消。
pub fn never_cancel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

async fn wait_cancelled(cancel: &mut watch::Receiver<bool>) {
    loop {
        if *cancel.borrow_and_update() {
            return;
        }
        if cancel.changed().await.is_err() {
            // Sender 已丢弃，不会再有取消信号
            std::future::pending::<()>().await;
        }
    }
}

fn cancelled(operation: &str) -> PetstoreError {
    warn!(operation, "轮询被取消");
    PetstoreError::Cancelled {
        operation: operation.to_string(),
    }
}

fn timed_out(operation: &str, attempts: u32, policy: &PollPolicy) -> PetstoreError {
    warn!(
        operation,
        attempts,
        timeout_ms = policy.timeout.as_millis() as u64,
        "轮询超时"
    );
    PetstoreError::PollTimeout {
        operation: operation.to_string(),
        attempts,
    }
}

// ---------------------------------------------------------------------------
// 单元测试
// ---------------------------------------------------------------------------
