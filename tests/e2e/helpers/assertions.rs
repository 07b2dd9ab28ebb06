//! 自定义断言宏和辅助函数
//!
//! 远端演示服务的行为并不稳定，多数用例断言状态码属于一个集合而非某个固定值。

use std::time::Duration;

use petstore_client::ApiResponse;
use serde_json::Value;

/// 创建请求的响应时间上限
pub const CREATE_LATENCY_LIMIT: Duration = Duration::from_secs(2);

/// 断言状态码属于给定集合
#[macro_export]
macro_rules! assert_status_in {
    ($resp:expr, [$($code:expr),+ $(,)?]) => {{
        let resp = &$resp;
        let expected: &[u16] = &[$($code),+];
        assert!(
            resp.status_in(expected),
            "{} 的状态码应属于 {:?}，实际为 {}，响应: {}",
            resp.url(),
            expected,
            resp.status_code(),
            resp.text()
        );
    }};
}

/// 断言状态码等于给定值
#[macro_export]
macro_rules! assert_status {
    ($resp:expr, $code:expr) => {
        $crate::assert_status_in!($resp, [$code])
    };
}

/// 解析 JSON 响应体，失败时带上原始响应文本
pub fn json_body(resp: &ApiResponse) -> Value {
    match resp.json_value() {
        Ok(value) => value,
        Err(e) => panic!("{} 响应体不是 JSON: {e}，原文: {}", resp.url(), resp.text()),
    }
}

/// 断言字段存在且为整数
pub fn assert_int_field(value: &Value, field: &str) -> i64 {
    match value.get(field).and_then(Value::as_i64) {
        Some(v) => v,
        None => panic!("字段 {field} 应为整数: {value}"),
    }
}

/// 断言字段存在且为字符串
pub fn assert_str_field<'a>(value: &'a Value, field: &str) -> &'a str {
    match value.get(field).and_then(Value::as_str) {
        Some(v) => v,
        None => panic!("字段 {field} 应为字符串: {value}"),
    }
}

/// 断言请求耗时不超过上限
pub fn assert_within(resp: &ApiResponse, limit: Duration) {
    assert!(
        resp.elapsed() < limit,
        "{} 耗时 {:?}，应小于 {:?}",
        resp.url(),
        resp.elapsed(),
        limit
    );
}
